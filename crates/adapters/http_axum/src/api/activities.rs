//! JSON REST handlers for activities and their rosters.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use mergington_app::ports::ActivityRepository;
use mergington_domain::activity::Activity;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the signup endpoint.
#[derive(Deserialize)]
pub struct SignUpQuery {
    /// A missing `email` is treated as blank and rejected by the domain.
    #[serde(default)]
    pub email: String,
}

/// One activity as listed by `GET /activities`; the name is the map key.
#[derive(Serialize)]
pub struct ActivityView<'a> {
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: u32,
    pub participants: &'a [String],
}

impl<'a> From<&'a Activity> for ActivityView<'a> {
    fn from(activity: &'a Activity) -> Self {
        Self {
            description: &activity.description,
            schedule: &activity.schedule,
            max_participants: activity.max_participants,
            participants: &activity.participants,
        }
    }
}

/// Every activity keyed by name, serialized as a JSON object in directory order.
pub struct ActivityDirectory(pub Vec<Activity>);

impl Serialize for ActivityDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, &ActivityView::from(activity))?;
        }
        map.end()
    }
}

/// Confirmation body for roster mutations.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ActivityDirectory>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the signup and unregister endpoints.
pub enum MutationResponse {
    Ok(Json<MessageResponse>),
}

impl MutationResponse {
    fn message(message: String) -> Self {
        Self::Ok(Json(MessageResponse { message }))
    }
}

impl IntoResponse for MutationResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /activities`
pub async fn list<AR>(State(state): State<AppState<AR>>) -> Result<ListResponse, ApiError>
where
    AR: ActivityRepository + Send + Sync + 'static,
{
    let activities = state.activity_service.list_activities().await?;
    Ok(ListResponse::Ok(Json(ActivityDirectory(activities))))
}

/// `POST /activities/{name}/signup?email=...`
pub async fn sign_up<AR>(
    State(state): State<AppState<AR>>,
    Path(name): Path<String>,
    Query(query): Query<SignUpQuery>,
) -> Result<MutationResponse, ApiError>
where
    AR: ActivityRepository + Send + Sync + 'static,
{
    let activity = state
        .activity_service
        .sign_up(&name, &query.email)
        .await?;
    Ok(MutationResponse::message(format!(
        "Signed up {} for {}",
        query.email, activity.name
    )))
}

/// `DELETE /activities/{name}/participants/{email}`
pub async fn unregister<AR>(
    State(state): State<AppState<AR>>,
    Path((name, email)): Path<(String, String)>,
) -> Result<MutationResponse, ApiError>
where
    AR: ActivityRepository + Send + Sync + 'static,
{
    let activity = state.activity_service.unregister(&name, &email).await?;
    Ok(MutationResponse::message(format!(
        "Unregistered {email} from {}",
        activity.name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_directory_as_object_in_order() {
        let seeded = mergington_domain::seed::activities();
        let json = serde_json::to_string(&ActivityDirectory(seeded)).unwrap();

        let chess = json.find("\"Chess Club\"").unwrap();
        let olympiad = json.find("\"Science Olympiad\"").unwrap();
        assert!(chess < olympiad);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entry = &value["Chess Club"];
        assert_eq!(
            entry["description"],
            "Learn strategies and compete in chess tournaments"
        );
        assert_eq!(entry["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(entry["max_participants"], 12);
        assert_eq!(
            entry["participants"],
            serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
        );
        assert!(entry.get("name").is_none());
    }

    #[test]
    fn should_serialize_empty_directory_as_empty_object() {
        let json = serde_json::to_string(&ActivityDirectory(Vec::new())).unwrap();
        assert_eq!(json, "{}");
    }
}
