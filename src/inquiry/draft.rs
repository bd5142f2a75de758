use crate::catalog::ServiceOption;

/// Contact form contents while the visitor is typing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceOption,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Phone,
    Message,
}

impl InquiryDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Phone => self.phone = value,
            DraftField::Message => self.message = value,
        }
    }

    pub fn select_service(&mut self, service: ServiceOption) {
        self.service = service;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_empty_with_default_service() {
        let draft = InquiryDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.message.is_empty());
        assert_eq!(draft.service, ServiceOption::ContentCreation);
    }

    #[test]
    fn set_only_touches_named_field() {
        let mut draft = InquiryDraft::default();
        draft.set(DraftField::Email, "a@x.com".to_string());
        draft.set(DraftField::Phone, "9999999999".to_string());

        assert_eq!(draft.email, "a@x.com");
        assert_eq!(draft.phone, "9999999999");
        assert!(draft.name.is_empty());
        assert!(draft.message.is_empty());
    }

    #[test]
    fn select_service_replaces_previous_choice() {
        let mut draft = InquiryDraft::default();
        draft.select_service(ServiceOption::Other);
        draft.select_service(ServiceOption::WebsiteDevelopment);
        assert_eq!(draft.service, ServiceOption::WebsiteDevelopment);
    }
}
