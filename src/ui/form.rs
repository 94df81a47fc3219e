//! Transient state for the contact form.
//!
//! Three free-text fields and a send control. The values live only in
//! memory for the lifetime of the app; submission hands them to the
//! platform mail composer and clears them. No validation by design.

/// Focusable parts of the contact form, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
    Send,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Send,
            FormField::Send => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Send,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
            FormField::Send => FormField::Message,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Message => "Message",
            FormField::Send => "Send Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your full name",
            FormField::Email => "your.email@example.com",
            FormField::Message => "Tell me about your project or opportunity...",
            FormField::Send => "",
        }
    }
}

/// The three free-text fields, held transiently in memory.
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character to the focused field. The send control ignores
    /// text input.
    pub fn insert(&mut self, field: FormField, ch: char) {
        match field {
            FormField::Name => self.name.push(ch),
            FormField::Email => self.email.push(ch),
            FormField::Message => self.message.push(ch),
            FormField::Send => {}
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self, field: FormField) {
        match field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Email => {
                self.email.pop();
            }
            FormField::Message => {
                self.message.pop();
            }
            FormField::Send => {}
        }
    }

    /// Line breaks are allowed only in the message field.
    pub fn newline(&mut self, field: FormField) {
        if field == FormField::Message {
            self.message.push('\n');
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
            FormField::Send => "",
        }
    }

    /// Reset all fields after the composer opens.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_cycles_through_all_fields() {
        let mut field = FormField::Name;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(field);
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(seen.len(), 4);
        assert_eq!(FormField::Name.prev(), FormField::Send);
    }

    #[test]
    fn editing_targets_the_focused_field() {
        let mut form = ContactForm::new();
        form.insert(FormField::Name, 'a');
        form.insert(FormField::Email, 'b');
        form.insert(FormField::Message, 'c');
        form.insert(FormField::Send, 'x');
        assert_eq!(form.name, "a");
        assert_eq!(form.email, "b");
        assert_eq!(form.message, "c");
        form.backspace(FormField::Name);
        assert_eq!(form.name, "");
    }

    #[test]
    fn newlines_only_land_in_the_message() {
        let mut form = ContactForm::new();
        form.newline(FormField::Name);
        form.newline(FormField::Message);
        assert_eq!(form.name, "");
        assert_eq!(form.message, "\n");
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = ContactForm::new();
        form.insert(FormField::Name, 'a');
        form.insert(FormField::Message, 'm');
        form.clear();
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }
}
