use super::transport::{ApiError, ErrorKind};

/// Result of every repository operation: exactly one of a value or an error kind.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorKind),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Consumes the outcome, returning the value of a success.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(kind) => Some(*kind),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(kind) => Outcome::Failure(*kind),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(kind) => Outcome::Failure(kind),
        }
    }

    pub fn into_result(self) -> Result<T, ErrorKind> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(kind) => Err(kind),
        }
    }
}

impl<T> From<Result<T, ApiError>> for Outcome<T> {
    fn from(res: Result<T, ApiError>) -> Self {
        match res {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(e.kind()),
        }
    }
}
