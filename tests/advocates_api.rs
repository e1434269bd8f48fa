mod common;

use axum::http::StatusCode;
use std::collections::HashSet;

use advocates::database::advocates_repo;
use advocates::models::NewAdvocate;
use common::{get, last_names, seeded_app};

#[tokio::test]
async fn default_listing_is_first_page_by_last_name() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/api/advocates").await;
    assert_eq!(status, StatusCode::OK);

    let pagination = &body["pagination"];
    assert_eq!(pagination["page"], 1);
    assert_eq!(pagination["pageSize"], 10);
    assert_eq!(pagination["totalCount"], 15);
    assert_eq!(pagination["totalPages"], 2);
    assert_eq!(pagination["hasNextPage"], true);
    assert_eq!(pagination["hasPreviousPage"], false);

    let names = last_names(&body);
    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "Brown");
    assert_eq!(names[1], "Clark");

    let first = &body["data"][0];
    assert_eq!(first["firstName"], "Michael");
    assert!(first["specialties"].is_array());
    assert!(first["phoneNumber"].is_string());
    assert!(first["createdAt"].is_string());
}

#[tokio::test]
async fn paging_values_are_coerced_not_rejected() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/api/advocates?pageSize=9999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["pageSize"], 100);
    assert_eq!(body["data"].as_array().unwrap().len(), 15);

    let (status, body) = get(&app, "/api/advocates?page=-5&pageSize=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["pageSize"], 10);
}

#[tokio::test]
async fn page_past_the_end_is_empty_with_accurate_totals() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/api/advocates?page=7").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["totalCount"], 15);
    assert_eq!(body["pagination"]["hasNextPage"], false);
    assert_eq!(body["pagination"]["hasPreviousPage"], true);
}

#[tokio::test]
async fn unknown_sort_column_falls_back_to_last_name() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/api/advocates?sortBy=dropTable&sortOrder=desc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(last_names(&body)[0], "Walker");

    let (status, body) = get(&app, "/api/advocates?sortBy=dropTable").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(last_names(&body)[0], "Brown");
}

#[tokio::test]
async fn sorts_by_experience_descending() {
    let (app, _pool) = seeded_app().await;

    let (_, body) = get(
        &app,
        "/api/advocates?sortBy=yearsOfExperience&sortOrder=DESC&pageSize=3",
    )
    .await;
    let years: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["yearsOfExperience"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![14, 13, 12]);
}

#[tokio::test]
async fn full_name_search_matches_concatenated_name() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/api/advocates?search=Laura%20Clark").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalCount"], 1);
    assert_eq!(body["data"][0]["firstName"], "Laura");
    assert_eq!(body["data"][0]["lastName"], "Clark");
}

#[tokio::test]
async fn search_is_case_insensitive_across_fields() {
    let (app, _pool) = seeded_app().await;

    let (_, body) = get(&app, "/api/advocates?search=ptsd").await;
    assert_eq!(body["pagination"]["totalCount"], 1);
    assert_eq!(body["data"][0]["lastName"], "Davis");

    let (_, body) = get(&app, "/api/advocates?search=DALLAS").await;
    assert_eq!(body["pagination"]["totalCount"], 1);

    let (_, body) = get(&app, "/api/advocates?search=msw").await;
    assert_eq!(body["pagination"]["totalCount"], 5);
}

#[tokio::test]
async fn like_wildcards_in_search_are_literal() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/api/advocates?search=%25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalCount"], 0);
    assert_eq!(body["pagination"]["totalPages"], 0);

    let (_, body) = get(&app, "/api/advocates?search=_").await;
    assert_eq!(body["pagination"]["totalCount"], 0);
}

#[tokio::test]
async fn degree_values_or_and_categories_and() {
    let (app, _pool) = seeded_app().await;

    let (_, body) = get(&app, "/api/advocates?degrees=MD&degrees=phd&pageSize=100").await;
    assert_eq!(body["pagination"]["totalCount"], 10);
    for a in body["data"].as_array().unwrap() {
        let degree = a["degree"].as_str().unwrap();
        assert!(degree == "MD" || degree == "PhD", "unexpected degree {degree}");
    }

    let (_, body) = get(
        &app,
        "/api/advocates?degrees=MD&degrees=PhD&minExperience=10&pageSize=100",
    )
    .await;
    assert_eq!(body["pagination"]["totalCount"], 6);
    for a in body["data"].as_array().unwrap() {
        assert!(a["yearsOfExperience"].as_i64().unwrap() >= 10);
    }
}

#[tokio::test]
async fn city_filter_is_partial_match() {
    let (app, _pool) = seeded_app().await;

    let (_, body) = get(&app, "/api/advocates?cities=san").await;
    assert_eq!(body["pagination"]["totalCount"], 4);

    let (_, body) = get(&app, "/api/advocates?cities=Austin&cities=Dallas").await;
    assert_eq!(body["pagination"]["totalCount"], 2);
}

#[tokio::test]
async fn experience_range_and_bad_bounds() {
    let (app, _pool) = seeded_app().await;

    let (_, body) = get(&app, "/api/advocates?minExperience=5&maxExperience=8").await;
    // 5, 5, 6, 7, 8
    assert_eq!(body["pagination"]["totalCount"], 5);

    let (status, body) = get(&app, "/api/advocates?minExperience=lots").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalCount"], 15);
}

#[tokio::test]
async fn specialty_filter_matches_any_requested() {
    let (app, _pool) = seeded_app().await;

    let (_, body) = get(&app, "/api/advocates?specialties=Bipolar").await;
    // John Doe and Amanda Hall
    assert_eq!(body["pagination"]["totalCount"], 2);

    let (_, body) = get(
        &app,
        "/api/advocates?specialties=Bipolar&specialties=Sleep%20issues",
    )
    .await;
    assert_eq!(body["pagination"]["totalCount"], 3);
}

#[tokio::test]
async fn iterating_every_page_yields_total_count_once() {
    let (app, _pool) = seeded_app().await;

    for query in ["", "&degrees=MSW", "&search=an", "&sortBy=city&sortOrder=desc"] {
        let (_, first) = get(&app, &format!("/api/advocates?pageSize=4{query}")).await;
        let total = first["pagination"]["totalCount"].as_i64().unwrap();
        let pages = first["pagination"]["totalPages"].as_i64().unwrap();

        let mut seen = HashSet::new();
        for page in 1..=pages {
            let (_, body) =
                get(&app, &format!("/api/advocates?pageSize=4&page={page}{query}")).await;
            for a in body["data"].as_array().unwrap() {
                assert!(seen.insert(a["id"].as_i64().unwrap()), "row repeated");
            }
        }
        assert_eq!(seen.len() as i64, total, "query {query:?}");
    }
}

#[tokio::test]
async fn store_failure_is_generic_500() {
    let (app, pool) = seeded_app().await;
    pool.close().await;

    let (status, body) = get(&app, "/api/advocates").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch advocates");
    assert!(body.get("data").is_none());

    let (status, body) = get(&app, "/api/advocates/cities").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch cities");
}

#[tokio::test]
async fn search_whitespace_is_part_of_the_term() {
    let (app, _pool) = seeded_app().await;

    let (_, body) = get(&app, "/api/advocates?search=%20Clark").await;
    assert_eq!(body["pagination"]["totalCount"], 1);
    assert_eq!(body["data"][0]["firstName"], "Laura");

    let (status, body) = get(&app, "/api/advocates?search=%20%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalCount"], 0);

    let (_, body) = get(&app, "/api/advocates?search=").await;
    assert_eq!(body["pagination"]["totalCount"], 15);
}

#[tokio::test]
async fn text_sort_ignores_letter_case() {
    let (app, pool) = seeded_app().await;
    advocates_repo::insert_batch(
        &pool,
        &[NewAdvocate {
            first_name: "Ana".to_string(),
            last_name: "de Silva".to_string(),
            city: "austin".to_string(),
            degree: "MD".to_string(),
            specialties: vec!["Bipolar".to_string()],
            years_of_experience: 2,
            phone_number: "5550001111".to_string(),
        }],
    )
    .await
    .expect("insert should succeed");

    let (_, body) = get(&app, "/api/advocates?pageSize=5").await;
    assert_eq!(
        last_names(&body),
        vec!["Brown", "Clark", "Davis", "de Silva", "Doe"]
    );

    let (_, body) = get(&app, "/api/advocates?sortBy=city&pageSize=2").await;
    let cities: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["city"].as_str().unwrap())
        .collect();
    assert_eq!(cities, vec!["Austin", "austin"]);
}
