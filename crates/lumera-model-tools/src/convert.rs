pub mod diagnostic;
pub mod practice;
pub mod progress;
pub mod question;

use lumera_entity::SessionStatus;
use lumera_model::session::SessionState;

pub trait IntoDbModel<T>: Sized {
    fn into_db_model(self) -> T;
}

pub trait FromDbModel<T>: Sized {
    fn from_db_model(model: T) -> Self;
}

pub trait IntoModel<T>: Sized {
    fn into_model(self) -> T;
}

pub trait FromModel<T>: Sized {
    fn from_model(model: T) -> Self;
}

impl<T, U> IntoModel<U> for T
where
    U: FromDbModel<T>,
{
    fn into_model(self) -> U {
        U::from_db_model(self)
    }
}

impl<T, U> IntoDbModel<U> for T
where
    U: FromModel<T>,
{
    fn into_db_model(self) -> U {
        U::from_model(self)
    }
}

pub trait TryFromDbModel<T>: Sized {
    type Error;

    fn try_from_db_model(model: T) -> Result<Self, Self::Error>;
}

pub trait TryIntoModel<T>: Sized {
    type Error;

    fn try_into_model(self) -> Result<T, Self::Error>;
}

impl<T, U> TryIntoModel<U> for T
where
    U: TryFromDbModel<T>,
{
    type Error = U::Error;

    fn try_into_model(self) -> Result<U, U::Error> {
        U::try_from_db_model(self)
    }
}

impl FromDbModel<SessionStatus> for SessionState {
    fn from_db_model(model: SessionStatus) -> Self {
        match model {
            SessionStatus::InProgress => Self::InProgress,
            SessionStatus::Completed => Self::Completed,
        }
    }
}

impl FromModel<SessionState> for SessionStatus {
    fn from_model(model: SessionState) -> Self {
        match model {
            SessionState::InProgress => Self::InProgress,
            SessionState::Completed => Self::Completed,
        }
    }
}
