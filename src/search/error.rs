use thiserror::Error;

/// Rejected before anything is sent; shown to the user as a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor selecciona una fecha.")]
    MissingDate,
    #[error("La fecha \"{0}\" no es válida.")]
    InvalidDate(String),
    #[error("La fecha final debe ser igual o posterior a la fecha inicial.")]
    InvalidRange,
    #[error("La cantidad de días debe ser un número entero mayor o igual a 1 (recibido \"{0}\").")]
    InvalidDays(String),
    #[error("Recinto desconocido: {0}")]
    UnknownVenue(String),
    #[error("Cancha desconocida: {0}")]
    UnknownCourt(String),
    #[error("Hora no válida: {0}")]
    InvalidHour(String),
    #[error("La hora final debe ser igual o posterior a la hora inicial.")]
    InvalidHourRange,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No usable response: connection failure, unstructured error status, bad body.
    #[error("{0}")]
    Transport(String),
    /// The service answered with an error carrying `details`.
    #[error("{details}")]
    Application { status: u16, details: String },
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{SearchError, ValidationError};

    #[test]
    fn test_messages() {
        let application = SearchError::Application { status: 404, details: "no courts match".to_owned() };
        assert_eq!(application.to_string(), "no courts match");

        let validation: SearchError = ValidationError::MissingDate.into();
        assert_eq!(validation.to_string(), "Por favor selecciona una fecha.");
    }
}
