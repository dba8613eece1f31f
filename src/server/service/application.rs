use crate::{
    model::application::ApplicationDto,
    server::{
        error::AppError, model::user::SessionUser, service::question::QuestionService,
        service::relay::SubmissionRelay,
    },
};

/// Accepts submitted applications and hands them to the relay.
pub struct ApplicationService<'a> {
    relay: &'a SubmissionRelay,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new ApplicationService instance.
    ///
    /// # Arguments
    /// - `relay` - Relay used to deliver accepted applications
    pub fn new(relay: &'a SubmissionRelay) -> Self {
        Self { relay }
    }

    /// Validates an application and relays it to the webhook.
    ///
    /// Values are trimmed before validation. The `discord` field always carries the
    /// username of the logged-in user, whatever the client sent.
    ///
    /// # Arguments
    /// - `user` - Identity of the submitting user
    /// - `application` - Form payload as received
    ///
    /// # Returns
    /// - `Ok(())` - Application was delivered
    /// - `Err(AppError::ValidationErr)` - Application is malformed, nothing was sent
    /// - `Err(AppError::RelayErr)` - Webhook could not be reached or refused the message
    pub async fn submit(
        &self,
        user: &SessionUser,
        application: ApplicationDto,
    ) -> Result<(), AppError> {
        let mut application = application.trimmed();

        application.validate()?;
        QuestionService::validate_answers(&application.answers)?;

        application.discord = user.username.clone();

        self.relay.relay(&application).await?;

        Ok(())
    }
}
