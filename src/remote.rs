//! Thin HTTP boundary to the backend that owns the durable records.

use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    error::Error,
    models::{Meal, User},
};

pub struct RemoteClient {
    http: Client,
    users_url: Url,
    add_meal_url: Url,
}

#[derive(Serialize)]
struct AddMealRequest<'a> {
    #[serde(rename = "userID")]
    user_id: &'a str,
    meal: &'a Meal,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base = base_url.trim_end_matches('/');

        Ok(Self {
            http: Client::new(),
            users_url: Url::parse(&format!("{base}/users"))?,
            add_meal_url: Url::parse(&format!("{base}/addMeal"))?,
        })
    }

    /// Fetches the full user list. An empty body and an undecodable body
    /// are distinct failures; both leave the caller to decide what to keep.
    pub async fn fetch_users(&self) -> Result<Vec<User>, Error> {
        debug!("fetching users from {}", self.users_url);

        let response = self.http.get(self.users_url.clone()).send().await?;
        let body = response.text().await?;

        if body.is_empty() {
            return Err(Error::EmptyResponse);
        }

        let users: Vec<User> = serde_json::from_str(&body)?;
        info!("decoded {} users", users.len());

        Ok(users)
    }

    /// Appends one meal to a user's log. Success is HTTP 200 exactly.
    pub async fn add_meal(&self, user_id: &str, meal: &Meal) -> Result<(), Error> {
        debug!("adding meal {:?} for user {user_id}", meal.name);

        let payload = AddMealRequest { user_id, meal };
        let response = self
            .http
            .post(self.add_meal_url.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_meal_request_shape() {
        let meal = Meal {
            name: "Bar".to_string(),
            calories: 250,
            carbs: 30,
            fat: 6,
            protein: 10,
        };
        let payload = AddMealRequest {
            user_id: "u1",
            meal: &meal,
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["userID"], "u1");
        assert_eq!(json["meal"]["name"], "Bar");
        assert_eq!(json["meal"]["calories"], 250);
        assert_eq!(json["meal"]["protein"], 10);
        assert_eq!(json["meal"]["fat"], 6);
        assert_eq!(json["meal"]["carbs"], 30);
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            RemoteClient::new("not a url"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let client = RemoteClient::new("http://localhost:5001/").unwrap();

        assert_eq!(client.users_url.as_str(), "http://localhost:5001/users");
    }
}
