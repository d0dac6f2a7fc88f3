//! Route handler for the monthly summary of a year.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use time::OffsetDateTime;

use crate::{AppState, Error, summary::monthly_summary};

/// The query parameters of a monthly summary request.
///
/// `year` defaults to the current UTC year; `include_empty` is the text
/// `true` compared case-insensitively and defaults to false.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    year: Option<String>,
    include_empty: Option<String>,
}

/// A route handler for the per-month, per-category income and expense totals
/// of a year.
pub async fn get_monthly_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Result<Response, Error> {
    let year = match params.year {
        Some(text) => text.trim().parse::<i32>().map_err(|_| Error::InvalidYear)?,
        None => OffsetDateTime::now_utc().year(),
    };

    let include_empty = params
        .include_empty
        .is_some_and(|text| text.eq_ignore_ascii_case("true"));

    let transactions = state.store()?.read_all()?;
    let summaries = monthly_summary(&transactions, year, include_empty)?;

    Ok(Json(json!({
        "monthly_summaries": summaries,
    }))
    .into_response())
}

#[cfg(test)]
mod summary_route_tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{endpoints, routes::test_server::test_server};

    async fn seed_march_2024(server: &axum_test::TestServer) {
        let rows = [
            json!({"amount": 50, "description": "lunch", "category": "food", "date": "2024-03-01", "type": "expense"}),
            json!({"amount": 2000, "description": "salary", "category": "income", "date": "2024-03-05", "type": "income"}),
        ];

        for row in rows {
            server
                .post(endpoints::TRANSACTIONS)
                .json(&row)
                .await
                .assert_status(StatusCode::CREATED);
        }
    }

    #[tokio::test]
    async fn summarizes_march_2024() {
        let (server, _temp) = test_server();
        seed_march_2024(&server).await;

        let response = server
            .get(endpoints::MONTHLY_SUMMARY)
            .add_query_param("year", "2024")
            .await;

        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(
            body["monthly_summaries"],
            json!({
                "March": {
                    "income_by_category": {"income": 2000.0},
                    "expenses_by_category": {"food": 50.0},
                }
            })
        );
    }

    #[tokio::test]
    async fn include_empty_reports_all_months() {
        let (server, _temp) = test_server();
        seed_march_2024(&server).await;

        let body = server
            .get(endpoints::MONTHLY_SUMMARY)
            .add_query_param("year", "2024")
            .add_query_param("include_empty", "TRUE")
            .await
            .json::<Value>();

        let summaries = body["monthly_summaries"]
            .as_object()
            .expect("summaries should be an object");
        assert_eq!(summaries.len(), 12);
        assert_eq!(summaries["January"]["income_by_category"], json!({}));
    }

    #[tokio::test]
    async fn other_years_are_empty() {
        let (server, _temp) = test_server();
        seed_march_2024(&server).await;

        let body = server
            .get(endpoints::MONTHLY_SUMMARY)
            .add_query_param("year", "2019")
            .await
            .json::<Value>();

        assert_eq!(body["monthly_summaries"], json!({}));
    }

    #[tokio::test]
    async fn malformed_year_is_a_bad_request() {
        let (server, _temp) = test_server();

        let response = server
            .get(endpoints::MONTHLY_SUMMARY)
            .add_query_param("year", "two-thousand")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["error"],
            "year must be a valid number"
        );
    }

    #[tokio::test]
    async fn empty_store_yields_empty_summaries() {
        let (server, _temp) = test_server();

        let body = server
            .get(endpoints::MONTHLY_SUMMARY)
            .add_query_param("year", "2024")
            .await
            .json::<Value>();

        assert_eq!(body["monthly_summaries"], json!({}));
    }
}
