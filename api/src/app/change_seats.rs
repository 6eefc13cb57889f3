//! Change seats use case
//!
//! Validates and applies a seat-count change. Seats may only grow; the
//! organizer is the only actor allowed to change them.

use std::sync::Arc;

use crate::domain::entities::{User, WebinarId, WebinarUpdate, MAX_SEATS};
use crate::domain::ports::WebinarRepository;
use crate::error::{AppError, DomainError};

/// Command to change a webinar's seat count
#[derive(Debug, Clone)]
pub struct ChangeSeatsCommand {
    pub user: User,
    pub webinar_id: WebinarId,
    pub seats: i32,
}

/// Use case: validate and apply a seat-count change
pub struct ChangeSeats<R>
where
    R: WebinarRepository + ?Sized,
{
    webinars: Arc<R>,
}

impl<R> ChangeSeats<R>
where
    R: WebinarRepository + ?Sized,
{
    pub fn new(webinars: Arc<R>) -> Self {
        Self { webinars }
    }

    /// Change the seat count of an existing webinar.
    ///
    /// Checks run in a fixed order: not-found, not-organizer, reduction,
    /// seat upper bound. Validation precedes mutation and persistence, so
    /// any failure leaves stored state untouched.
    pub async fn execute(&self, command: ChangeSeatsCommand) -> Result<(), AppError> {
        let mut webinar = self
            .webinars
            .find_by_id(&command.webinar_id)
            .await?
            .ok_or(DomainError::WebinarNotFound)?;

        if !webinar.is_organizer(&command.user.id) {
            return Err(DomainError::NotOrganizer.into());
        }
        if command.seats < webinar.seats {
            return Err(DomainError::CannotReduceSeats.into());
        }
        if command.seats > MAX_SEATS {
            return Err(DomainError::TooManySeats.into());
        }

        webinar.update(WebinarUpdate {
            seats: Some(command.seats),
        });

        self.webinars.update(&webinar).await?;

        tracing::debug!(webinar_id = %webinar.id, seats = command.seats, "Seats changed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryWebinarRepository;
    use crate::test_utils::{test_user_alice, test_user_bob, test_webinar};

    fn repo_with_webinar() -> Arc<InMemoryWebinarRepository> {
        Arc::new(InMemoryWebinarRepository::new().with_webinar(test_webinar()))
    }

    async fn change_seats_to(
        repo: &Arc<InMemoryWebinarRepository>,
        user: User,
        webinar_id: &str,
        seats: i32,
    ) -> Result<(), AppError> {
        let use_case = ChangeSeats::new(repo.clone());
        use_case
            .execute(ChangeSeatsCommand {
                user,
                webinar_id: WebinarId::new(webinar_id),
                seats,
            })
            .await
    }

    fn assert_seats_unchanged(repo: &Arc<InMemoryWebinarRepository>) {
        let webinar = repo.get(&test_webinar().id).unwrap();
        assert_eq!(webinar.seats, 100);
    }

    #[tokio::test]
    async fn changes_the_number_of_seats() {
        let repo = repo_with_webinar();

        change_seats_to(&repo, test_user_alice(), "webinar-id", 200)
            .await
            .unwrap();

        let webinar = repo.get(&test_webinar().id).unwrap();
        assert_eq!(webinar.seats, 200);
    }

    #[tokio::test]
    async fn fails_when_the_webinar_does_not_exist() {
        let repo = repo_with_webinar();

        let err = change_seats_to(&repo, test_user_alice(), "non-existing-id", 200)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::WebinarNotFound)
        ));
        assert_seats_unchanged(&repo);
    }

    #[tokio::test]
    async fn fails_when_the_user_is_not_the_organizer() {
        let repo = repo_with_webinar();

        let err = change_seats_to(&repo, test_user_bob(), "webinar-id", 200)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::NotOrganizer)));
        assert_seats_unchanged(&repo);
    }

    #[tokio::test]
    async fn ownership_is_checked_before_the_reduction_rule() {
        let repo = repo_with_webinar();

        // Both rules are violated; the ownership rule must win
        let err = change_seats_to(&repo, test_user_bob(), "webinar-id", 50)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::NotOrganizer)));
        assert_seats_unchanged(&repo);
    }

    #[tokio::test]
    async fn fails_when_reducing_the_number_of_seats() {
        let repo = repo_with_webinar();

        let err = change_seats_to(&repo, test_user_alice(), "webinar-id", 50)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::CannotReduceSeats)
        ));
        assert_seats_unchanged(&repo);
    }

    #[tokio::test]
    async fn fails_when_exceeding_1000_seats() {
        let repo = repo_with_webinar();

        let err = change_seats_to(&repo, test_user_alice(), "webinar-id", 1001)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::TooManySeats)));
        assert_seats_unchanged(&repo);
    }

    #[tokio::test]
    async fn repeating_the_same_target_value_is_idempotent() {
        let repo = repo_with_webinar();

        change_seats_to(&repo, test_user_alice(), "webinar-id", 200)
            .await
            .unwrap();
        change_seats_to(&repo, test_user_alice(), "webinar-id", 200)
            .await
            .unwrap();

        let webinar = repo.get(&test_webinar().id).unwrap();
        assert_eq!(webinar.seats, 200);
    }
}
