use validator::Validate;

use crate::{
    email::relay::EmailRelay,
    entities::contact_me::{ContactReceivedResponse, NewContactMessage},
    errors::AppError,
    repositories::contact_me::ContactMeRepository,
};

pub struct ContactHandler<R, E>
where
    R: ContactMeRepository,
    E: EmailRelay,
{
    pub contact_repo: R,
    pub email_relay: E,
}

impl<R, E> ContactHandler<R, E>
where
    R: ContactMeRepository,
    E: EmailRelay,
{
    pub fn new(contact_repo: R, email_relay: E) -> Self {
        ContactHandler {
            contact_repo,
            email_relay,
        }
    }

    /// Validates the form, stores the message for the admin surface, then
    /// relays it to the email-sending endpoint. A relay failure surfaces as
    /// an error even though the message was stored; the sender is told to
    /// fall back to direct email.
    pub async fn submit_message(
        &self,
        form: NewContactMessage,
    ) -> Result<ContactReceivedResponse, AppError> {
        form.validate()?;

        let id = self.contact_repo.create_contact_message(&form).await?;

        self.email_relay.send(&form).await?;

        Ok(ContactReceivedResponse {
            id,
            message: "Your message has been sent.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::relay::MockEmailRelay;
    use crate::errors::RelayError;
    use crate::repositories::contact_me::MockContactMeRepository;
    use uuid::Uuid;

    fn form() -> NewContactMessage {
        NewContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "I enjoyed your work page.".into(),
        }
    }

    #[tokio::test]
    async fn valid_submission_is_stored_and_relayed() {
        let mut repo = MockContactMeRepository::new();
        repo.expect_create_contact_message()
            .returning(|_| Ok(Uuid::new_v4()));

        let mut relay = MockEmailRelay::new();
        relay.expect_send().returning(|_| Ok(()));

        let result = ContactHandler::new(repo, relay).submit_message(form()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_required_field_is_rejected_before_any_io() {
        let repo = MockContactMeRepository::new();
        let relay = MockEmailRelay::new();

        let mut incomplete = form();
        incomplete.message = String::new();

        let result = ContactHandler::new(repo, relay).submit_message(incomplete).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn relay_rejection_surfaces_as_relay_failure() {
        let mut repo = MockContactMeRepository::new();
        repo.expect_create_contact_message()
            .returning(|_| Ok(Uuid::new_v4()));

        let mut relay = MockEmailRelay::new();
        relay.expect_send().returning(|_| {
            Err(RelayError::Rejected {
                status: 500,
                detail: "upstream exploded".into(),
            })
        });

        let result = ContactHandler::new(repo, relay).submit_message(form()).await;
        assert!(matches!(result, Err(AppError::RelayFailed(_))));
    }

    #[tokio::test]
    async fn relay_network_error_surfaces_as_relay_failure() {
        let mut repo = MockContactMeRepository::new();
        repo.expect_create_contact_message()
            .returning(|_| Ok(Uuid::new_v4()));

        let mut relay = MockEmailRelay::new();
        relay
            .expect_send()
            .returning(|_| Err(RelayError::Connection("connection refused".into())));

        let result = ContactHandler::new(repo, relay).submit_message(form()).await;
        assert!(matches!(result, Err(AppError::RelayFailed(_))));
    }
}
