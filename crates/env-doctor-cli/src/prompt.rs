//! Interactive prompting for missing sync values.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use env_doctor::{PromptRequest, ValueType};

/// Ask for each missing value in order.
///
/// Prompts go to stderr so stdout stays clean for piped output. The caller
/// has already decided that prompting is allowed (interactive, not a dry
/// run, stdin is a TTY).
pub fn ask(requests: &[PromptRequest]) -> io::Result<HashMap<String, String>> {
    let stdin = io::stdin();
    let mut answers = HashMap::new();

    for request in requests {
        let mut label = format!("  Enter value for {}", request.key);
        if let Some(rule) = &request.rule {
            if rule.value_type != ValueType::String {
                label.push_str(&format!(" ({})", rule.value_type.label()));
            }
            if let Some(allowed) = &rule.allowed {
                label.push_str(&format!(" [{}]", allowed.join("|")));
            }
        }
        label.push_str(": ");

        eprint!("{label}");
        io::stderr().flush()?;

        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        answers.insert(request.key.clone(), answer);
    }

    Ok(answers)
}
