//! Message text sent to the WhatsApp chat. WhatsApp renders `*...*` as bold.

use crate::config::BRAND_NAME;
use crate::inquiry::draft::InquiryDraft;

pub fn compose_from_draft(draft: &InquiryDraft) -> String {
    format!(
        "*New Inquiry from {brand} website*\n\n\
         *Name:* {name}\n\
         *Email:* {email}\n\
         *Phone:* {phone}\n\
         *Service:* {service}\n\
         *Message:* {message}",
        brand = BRAND_NAME,
        name = draft.name,
        email = draft.email,
        phone = draft.phone,
        service = draft.service.label(),
        message = draft.message,
    )
}

pub fn compose_from_plan(plan_name: &str) -> String {
    format!(
        "*Inquiry regarding {plan}*\n\nHi {brand}, I'm interested in the {plan}. Please provide more details.",
        plan = plan_name,
        brand = BRAND_NAME,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceOption;

    #[test]
    fn draft_message_matches_template() {
        let draft = InquiryDraft {
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            phone: "9999999999".to_string(),
            service: ServiceOption::WebsiteDevelopment,
            message: "Need a site".to_string(),
        };

        assert_eq!(
            compose_from_draft(&draft),
            "*New Inquiry from Obsidian Media website*\n\n*Name:* Asha\n*Email:* a@x.com\n*Phone:* 9999999999\n*Service:* Website Development\n*Message:* Need a site"
        );
    }

    #[test]
    fn empty_draft_passes_through() {
        let text = compose_from_draft(&InquiryDraft::default());
        assert!(text.ends_with("*Name:* \n*Email:* \n*Phone:* \n*Service:* Content Creation\n*Message:* "));
    }

    #[test]
    fn plan_message_matches_template() {
        assert_eq!(
            compose_from_plan("Neo Package"),
            "*Inquiry regarding Neo Package*\n\nHi Obsidian Media, I'm interested in the Neo Package. Please provide more details."
        );
    }

    #[test]
    fn plan_message_names_plan_in_header_and_body_only() {
        let text = compose_from_plan("Upscale Package");
        assert!(text.starts_with("*Inquiry regarding Upscale Package*\n\n"));
        assert_eq!(text.matches("Upscale Package").count(), 2);
        for label in ["*Name:*", "*Email:*", "*Phone:*", "*Service:*", "*Message:*"] {
            assert!(!text.contains(label), "unexpected {}", label);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalog::ServiceOption;
    use proptest::prelude::*;

    fn arb_service() -> impl Strategy<Value = ServiceOption> {
        prop::sample::select(ServiceOption::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_labels_in_order_with_verbatim_values(
            name in any::<String>(),
            email in any::<String>(),
            phone in any::<String>(),
            service in arb_service(),
            message in any::<String>(),
        ) {
            let draft = InquiryDraft {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                service,
                message: message.clone(),
            };
            let text = compose_from_draft(&draft);

            let expected_tail = format!(
                "*Name:* {}\n*Email:* {}\n*Phone:* {}\n*Service:* {}\n*Message:* {}",
                name, email, phone, service.label(), message
            );
            prop_assert!(text.starts_with("*New Inquiry from Obsidian Media website*\n\n"));
            prop_assert!(text.ends_with(&expected_tail), "got: {:?}", text);
        }

        #[test]
        fn prop_plan_name_is_embedded_verbatim(plan in "[^*\n]{0,40}") {
            let text = compose_from_plan(&plan);
            let header = format!("*Inquiry regarding {}*\n\n", plan);
            prop_assert!(text.starts_with(&header));
            prop_assert!(!text.contains("*Name:*"));
        }
    }
}
