use leptos::*;

/// Shown once the contact form has been submitted. Nothing is sent anywhere.
pub const ACKNOWLEDGMENT: &str = "Obrigado! Entrarei em contato em breve.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Subject)
    }
}

/// Values read from the contact form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Required fields left blank, in form order.
    ///
    /// Only presence is checked here; the email format is left to the
    /// browser's `type="email"` validation.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
        .into_iter()
        .filter(|f| f.is_required() && self.value(*f).trim().is_empty())
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Whether the acknowledgment notice is showing.
///
/// There is a single notice per page: once shown it stays, and later submits
/// never add another.
#[derive(Clone, Copy)]
pub struct ContactFormState {
    acknowledged: RwSignal<bool>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            acknowledged: create_rw_signal(false),
        }
    }

    /// Tracked when read inside a reactive scope.
    pub fn acknowledged(&self) -> bool {
        self.acknowledged.get()
    }

    /// Handle a submitted draft. Returns `true` if the visitor was thanked.
    pub fn submit(&self, draft: &ContactDraft) -> bool {
        if !draft.is_complete() {
            log::debug!(
                "Portfolio: contact form submitted without {:?}",
                draft.missing_fields()
            );
            return false;
        }
        if !self.acknowledged.get_untracked() {
            self.acknowledged.set(true);
        }
        true
    }
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: String::new(),
            message: "Olá!".to_string(),
        }
    }

    #[test]
    fn test_complete_without_subject() {
        assert!(filled().is_complete());
    }

    #[test]
    fn test_blank_email_is_missing() {
        let draft = ContactDraft {
            email: String::new(),
            ..filled()
        };
        assert_eq!(draft.missing_fields(), vec![ContactField::Email]);
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let draft = ContactDraft {
            name: "   ".to_string(),
            message: "\n\t".to_string(),
            ..filled()
        };
        assert_eq!(
            draft.missing_fields(),
            vec![ContactField::Name, ContactField::Message]
        );
    }

    #[test]
    fn test_empty_draft_lists_required_fields_in_order() {
        assert_eq!(
            ContactDraft::default().missing_fields(),
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn test_only_subject_is_optional() {
        assert!(ContactField::Name.is_required());
        assert!(ContactField::Email.is_required());
        assert!(ContactField::Message.is_required());
        assert!(!ContactField::Subject.is_required());
    }

    #[test]
    fn test_complete_submit_shows_notice() {
        let runtime = create_runtime();

        let form = ContactFormState::new();
        assert!(!form.acknowledged());
        assert!(form.submit(&filled()));
        assert!(form.acknowledged());

        runtime.dispose();
    }

    #[test]
    fn test_resubmit_keeps_a_single_notice() {
        let runtime = create_runtime();

        let form = ContactFormState::new();
        // Count how many times the notice goes from hidden to shown
        let shown = create_rw_signal(0usize);
        create_effect(move |was_shown: Option<bool>| {
            let now = form.acknowledged();
            if now && was_shown != Some(true) {
                shown.update(|n| *n += 1);
            }
            now
        });

        assert!(form.submit(&filled()));
        assert!(form.submit(&filled()));

        assert!(form.acknowledged());
        assert_eq!(shown.get_untracked(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_blank_email_submit_shows_nothing() {
        let runtime = create_runtime();

        let form = ContactFormState::new();
        let draft = ContactDraft {
            email: String::new(),
            ..filled()
        };
        assert!(!form.submit(&draft));
        assert!(!form.acknowledged());

        runtime.dispose();
    }
}
