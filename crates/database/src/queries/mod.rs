use crate::repo::DatabaseError;

pub mod charging_station;
pub mod parking_lot;
pub mod recommendation;
pub mod site;

// Every statement in this module binds its values positionally. Table names,
// column lists and orderings are constants, never user input.

pub(crate) fn convert_error(why: sqlx::Error) -> DatabaseError {
    match why {
        sqlx::Error::RowNotFound => DatabaseError::NotFound,
        _ => DatabaseError::Other(Box::new(why)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_not_found() {
        assert!(matches!(
            convert_error(sqlx::Error::RowNotFound),
            DatabaseError::NotFound
        ));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let error = convert_error(sqlx::Error::Protocol("connection reset".to_owned()));
        assert!(matches!(error, DatabaseError::Other(_)));
        assert!(error.to_string().contains("connection reset"));
    }
}
