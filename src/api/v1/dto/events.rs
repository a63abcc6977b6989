/*
 * Responsibility
 * - Events request/response DTOs
 * - the creator id is never accepted from the body; it comes from AuthCtx
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::{EventRow, NewEvent};

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
}

impl CreateEventRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.description.trim().is_empty() {
            return Err("description is required");
        }
        if self.location.trim().is_empty() {
            return Err("location is required");
        }

        Ok(())
    }

    pub fn into_new_event(self, user_id: i64) -> NewEvent {
        NewEvent {
            name: self.name,
            description: self.description,
            location: self.location,
            date_time: self.date_time,
            user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub user_id: i64,
}

impl From<EventRow> for EventResponse {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            location: row.location,
            date_time: row.date_time,
            user_id: row.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, description: &str, location: &str) -> CreateEventRequest {
        CreateEventRequest {
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            date_time: Utc::now(),
        }
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(request(" ", "d", "l").validate(), Err("name is required"));
        assert_eq!(request("n", "", "l").validate(), Err("description is required"));
        assert_eq!(request("n", "d", "\t").validate(), Err("location is required"));
        assert_eq!(request("n", "d", "l").validate(), Ok(()));
    }

    #[test]
    fn user_id_in_body_is_ignored() {
        let req: CreateEventRequest = serde_json::from_str(
            r#"{"name":"n","description":"d","location":"l",
                "date_time":"2026-01-01T10:00:00Z","user_id":999}"#,
        )
        .unwrap();

        let event = req.into_new_event(7);
        assert_eq!(event.user_id, 7);
    }
}
