use error_stack::Report;
use kernel::KernelError;
use mongodb::error::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Mongo(mongodb::error::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
}

impl From<mongodb::error::Error> for DriverError {
    fn from(value: mongodb::error::Error) -> Self {
        Self::Mongo(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                DriverError::Mongo(error) => match error.kind.as_ref() {
                    ErrorKind::ServerSelection { .. } => KernelError::Timeout,
                    _ => KernelError::Internal,
                },
                _ => KernelError::Internal,
            };
            Report::new(error).change_context(context)
        })
    }
}
