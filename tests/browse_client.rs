mod common;

use tokio::net::TcpListener;

use advocates::client::{
    ApiClient, ApiClientConfig, ListController, PageTarget, ScrollAnchor,
};
use advocates::services::advocate_query::{SortColumn, SortOrder};
use common::seeded_app;

async fn spawn_server() -> ApiClient {
    let (app, _pool) = seeded_app().await;
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("bound address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });

    ApiClient::new(ApiClientConfig {
        base_url: format!("http://{addr}/"),
    })
}

#[tokio::test]
async fn search_then_page_and_sort_against_live_server() {
    let client = spawn_server().await;
    let mut controller = ListController::new();

    let ticket = controller.submit_search();
    assert!(client.execute(&mut controller, ticket).await.is_none());
    assert!(!controller.is_loading());
    assert_eq!(controller.pagination().total_count, 15);
    assert_eq!(controller.results()[0].last_name, "Brown");

    let ticket = controller.go_to_page(PageTarget::Last).expect("searched");
    client.execute(&mut controller, ticket).await;
    assert_eq!(controller.pagination().page, 2);
    assert_eq!(controller.results().len(), 5);

    let anchor = ScrollAnchor {
        table_offset: 40,
        page_offset: 300,
    };
    let ticket = controller
        .activate_sort(SortColumn::YearsOfExperience, anchor)
        .expect("searched");
    assert_eq!(ticket.request.sort_order, SortOrder::Desc);
    assert_eq!(client.execute(&mut controller, ticket).await, Some(anchor));
    // sort keeps the current page
    assert_eq!(controller.pagination().page, 2);
    let years: Vec<i64> = controller
        .results()
        .iter()
        .map(|a| a.years_of_experience)
        .collect();
    assert_eq!(years, vec![6, 5, 5, 4, 3]);

    let ticket = controller
        .activate_sort(SortColumn::YearsOfExperience, anchor)
        .expect("searched");
    assert_eq!(ticket.request.sort_order, SortOrder::Asc);
    client.execute(&mut controller, ticket).await;
    assert_eq!(controller.results()[0].years_of_experience, 10);
}

#[tokio::test]
async fn filters_travel_as_repeated_pairs() {
    let client = spawn_server().await;
    let mut controller = ListController::new();

    controller.filters_mut().toggle_degree("MD");
    controller.filters_mut().toggle_degree("PhD");
    controller.filters_mut().min_experience = "10".to_string();

    let ticket = controller.submit_search();
    client.execute(&mut controller, ticket).await;
    assert_eq!(controller.pagination().total_count, 6);

    let ticket = controller.change_page_size(25).expect("searched");
    client.execute(&mut controller, ticket).await;
    assert_eq!(controller.pagination().page_size, 25);
    assert_eq!(controller.results().len(), 6);
}

#[tokio::test]
async fn response_for_superseded_request_is_dropped() {
    let client = spawn_server().await;
    let mut controller = ListController::new();

    let stale = controller.submit_search();
    controller.filters_mut().search = "Laura".to_string();
    let fresh = controller.submit_search();

    client.execute(&mut controller, fresh).await;
    assert_eq!(controller.pagination().total_count, 1);

    client.execute(&mut controller, stale).await;
    assert_eq!(controller.pagination().total_count, 1);
    assert_eq!(controller.results()[0].first_name, "Laura");
}

#[tokio::test]
async fn facets_load_from_live_server() {
    let client = spawn_server().await;

    let facets = client.load_facets().await;
    assert_eq!(facets.degrees, vec!["MD", "MSW", "PhD"]);
    assert_eq!(facets.cities.len(), 15);
    assert_eq!(facets.specialties.len(), 26);
}

#[tokio::test]
async fn unreachable_server_empties_table() {
    let client = ApiClient::new(ApiClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
    });
    let mut controller = ListController::new();

    let ticket = controller.submit_search();
    assert!(client.execute(&mut controller, ticket).await.is_none());
    assert!(!controller.is_loading());
    assert!(controller.results().is_empty());

    let facets = client.load_facets().await;
    assert!(facets.cities.is_empty());
}
