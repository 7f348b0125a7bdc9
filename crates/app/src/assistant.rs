//! Canned responder for the assistant panel's conversational mode.
//!
//! Keyword matching stands in for a real model; the panel treats the reply
//! as opaque text either way.

pub fn reply(input: &str) -> String {
    let lowered = input.to_lowercase();

    if lowered.contains("command") || lowered.contains("palette") {
        "Press Tab to browse the commands available on this screen.".to_string()
    } else if lowered.contains("project") {
        "You can create, filter and sort projects from the catalog, or open one to work on its board.".to_string()
    } else if lowered.contains("help") {
        "Ask about projects or commands, or press Tab to see what I can run here.".to_string()
    } else {
        format!("I don't have an answer for \"{}\" yet. Try asking about projects or commands.", input.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_mentions_browser_for_command_questions() {
        assert!(reply("what COMMANDS do you know?").contains("Tab"));
    }

    #[test]
    fn test_reply_falls_back_with_echo() {
        assert!(reply("weather tomorrow?").contains("weather tomorrow?"));
    }
}
