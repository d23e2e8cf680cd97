#[cfg(test)]
pub mod test_utils {
    use chrono::{DateTime, Utc};
    use history_api::HistoryDocument;
    use serde_json::{json, Value};
    use sqlx::types::Json;
    use sqlx::PgPool;

    pub fn create_test_document(score: i64) -> HistoryDocument {
        HistoryDocument::try_from_payload(json!({ "score": score })).unwrap()
    }

    /// Insert a row with an explicit `created_at`, bypassing the repository.
    pub async fn insert_at(
        pool: &PgPool,
        data: Value,
        created_at: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO history (data, created_at) VALUES ($1, $2) RETURNING id::BIGINT")
            .bind(Json(data))
            .bind(created_at)
            .fetch_one(pool)
            .await
    }
}
