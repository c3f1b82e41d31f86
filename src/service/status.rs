/// HTTP status classes. A code belongs to at most one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusClass {
    pub fn of(code: i64) -> Option<StatusClass> {
        match code {
            200..=299 => Some(StatusClass::Success),
            300..=399 => Some(StatusClass::Redirection),
            400..=499 => Some(StatusClass::ClientError),
            500..=599 => Some(StatusClass::ServerError),
            _ => None,
        }
    }
}

fn class_of(code: Option<i64>) -> Option<StatusClass> {
    StatusClass::of(code.unwrap_or_default())
}

pub fn is_2xx(code: Option<i64>) -> bool {
    class_of(code) == Some(StatusClass::Success)
}

pub fn is_3xx(code: Option<i64>) -> bool {
    class_of(code) == Some(StatusClass::Redirection)
}

pub fn is_4xx(code: Option<i64>) -> bool {
    class_of(code) == Some(StatusClass::ClientError)
}

pub fn is_5xx(code: Option<i64>) -> bool {
    class_of(code) == Some(StatusClass::ServerError)
}
