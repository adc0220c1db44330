use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use versenote::api::{CmdMessage, MessageLevel};
use versenote::model::{Lookup, Note, VerseResult};

const LINE_WIDTH: usize = 100;
const REFERENCE_WIDTH: usize = 24;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_lookup(lookup: &Lookup) {
    println!("{} {}", "Bible Verse:".bold(), lookup.reference.bold());
    println!();
    match &lookup.verse {
        VerseResult::Passage(p) => {
            println!("{}", "VERSE:".cyan());
            println!("{}", p.text.trim_end());
            println!();
            println!("{} {}", "SOURCE:".cyan(), p.source.dimmed());
        }
        VerseResult::Error(_) => {
            println!("{}", lookup.verse.display_text().red());
        }
    }
    println!();
    match &lookup.note {
        Some(note) => {
            println!("{}", "INTERPRETATION:".cyan());
            println!("{}", note.text);
        }
        None => println!("{}", "No interpretation found.".dimmed()),
    }
}

pub(super) fn print_note(note: &Note) {
    println!("{}", note.reference.bold());
    println!("--------------------------------");
    println!("{}", note.text);
}

pub(super) fn print_notes(notes: &[Note]) {
    for note in notes {
        let reference = pad_to_width(&truncate_to_width(&note.reference, REFERENCE_WIDTH), REFERENCE_WIDTH);
        let first_line = note.text.lines().next().unwrap_or("");
        let available = LINE_WIDTH.saturating_sub(REFERENCE_WIDTH + 2);
        let preview = truncate_to_width(first_line, available);
        println!("{}  {}", reference.yellow(), preview);
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
