// Escape Sequence Encoding
//
// Byte-exact notification sequences:
// - bell:   BEL
// - osc9:   ESC ] 9 ; <title>: <message> ST
// - osc777: ESC ] 777 ; notify ; <title> ; <message> ST
// - osc99:  ESC ] 99 ; d=0 ; <title> - <message> ST
// where ST is ESC \

use crate::types::NotificationMethod;

pub const BEL: &str = "\x07";
const OSC: &str = "\x1b]";
const ST: &str = "\x1b\\";

fn is_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{1f}' | '\u{7f}')
}

/// Remove C0 control characters and DEL
pub fn strip_control(text: &str) -> String {
    text.chars().filter(|c| !is_control(*c)).collect()
}

/// Remove control characters and the `;` field separator
pub fn strip_field(text: &str) -> String {
    text.chars().filter(|c| !is_control(*c) && *c != ';').collect()
}

/// Encode a notification for the given method
pub fn encode(method: NotificationMethod, title: &str, message: &str) -> String {
    match method {
        NotificationMethod::Bell => BEL.to_string(),
        // OSC 9 has no title field
        NotificationMethod::Osc9 => {
            format!("{OSC}9;{}{ST}", strip_control(&format!("{title}: {message}")))
        }
        NotificationMethod::Osc777 => {
            format!("{OSC}777;notify;{};{}{ST}", strip_field(title), strip_field(message))
        }
        NotificationMethod::Osc99 => {
            format!("{OSC}99;d=0;{} - {}{ST}", strip_field(title), strip_field(message))
        }
    }
}
