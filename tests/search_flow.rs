mod common;

use std::sync::Arc;
use std::time::Duration;

use wildscape_search::{
    CatalogStore, CriteriaError, CriteriaPatch, Difficulty, FilterCriteria, SearchConfig,
    SearchController,
};

use common::{ready_controller, result_ids, sample_catalog, StaticSource};

#[tokio::test]
async fn results_are_empty_before_the_first_computation() {
    let store = Arc::new(CatalogStore::new(StaticSource(sample_catalog())));
    store.load().await.unwrap();
    let controller = SearchController::new(store);
    assert!(controller.results().is_empty());
    assert_eq!(controller.recompute_count(), 0);
}

#[tokio::test]
async fn empty_query_returns_the_full_catalog_in_order() {
    common::init_tracing();
    let controller = ready_controller().await;
    assert_eq!(result_ids(&controller), ["r1", "r2", "r3"]);
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_coalesce_into_one_recompute() {
    let controller = ready_controller().await;
    let baseline = controller.recompute_count();

    controller.set_query("a");
    controller.set_query("al");
    controller.set_query("alp");

    // inside the debounce window nothing has committed yet
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(result_ids(&controller), ["r1", "r2", "r3"]);
    assert_eq!(controller.recompute_count(), baseline);
    assert_eq!(controller.query(), "alp");

    // past the window: exactly one recompute, using only the final text
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(controller.recompute_count(), baseline + 1);
    assert_eq!(result_ids(&controller), ["r1"]);
}

#[tokio::test(start_paused = true)]
async fn a_new_keystroke_restarts_the_debounce_window() {
    let controller = ready_controller().await;
    let baseline = controller.recompute_count();

    controller.set_query("alp");
    tokio::time::sleep(Duration::from_millis(200)).await;
    controller.set_query("fjord");
    // 200ms later the first window would have expired, the second has not
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(controller.recompute_count(), baseline);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(controller.recompute_count(), baseline + 1);
    assert_eq!(result_ids(&controller), ["r2"]);
}

#[tokio::test]
async fn criteria_changes_recompute_immediately() {
    let controller = ready_controller().await;
    controller
        .set_criteria(CriteriaPatch::new().country("Norway"))
        .unwrap();
    assert_eq!(result_ids(&controller), ["r1", "r2"]);

    controller
        .set_criteria(CriteriaPatch::new().difficulty(Difficulty::Moderate))
        .unwrap();
    assert_eq!(result_ids(&controller), ["r2"]);
}

#[tokio::test]
async fn norway_price_scenario_returns_the_first_record() {
    let controller = ready_controller().await;
    controller
        .set_criteria(CriteriaPatch::new().country("Norway").price_range(30.0, 50.0))
        .unwrap();
    assert_eq!(result_ids(&controller), ["r1"]);
}

#[tokio::test]
async fn amenity_intersection_excludes_partial_matches() {
    let controller = ready_controller().await;
    controller
        .set_criteria(CriteriaPatch::new().amenities(["hiking_trails", "fishing"]))
        .unwrap();
    assert_eq!(result_ids(&controller), ["r3"]);
}

#[tokio::test]
async fn rejected_criteria_leave_prior_state_intact() {
    let controller = ready_controller().await;
    controller
        .set_criteria(CriteriaPatch::new().country("Norway"))
        .unwrap();

    let err = controller
        .set_criteria(CriteriaPatch::new().price_range(100.0, 10.0))
        .unwrap_err();
    assert_eq!(
        err,
        CriteriaError::InvertedPriceRange {
            min: 100.0,
            max: 10.0
        }
    );

    let criteria = controller.criteria();
    assert_eq!(criteria.country.as_deref(), Some("Norway"));
    assert!(criteria.price_range.is_none());
    assert_eq!(result_ids(&controller), ["r1", "r2"]);
}

#[tokio::test]
async fn unsetting_a_criterion_grows_the_result_set() {
    let controller = ready_controller().await;
    controller
        .set_criteria(CriteriaPatch::new().country("Norway").price_range(30.0, 50.0))
        .unwrap();
    let constrained = controller.results().len();

    controller
        .set_criteria(CriteriaPatch::new().clear_price_range())
        .unwrap();
    assert!(controller.results().len() >= constrained);
    assert_eq!(result_ids(&controller), ["r1", "r2"]);
}

#[tokio::test(start_paused = true)]
async fn immediate_criteria_recompute_uses_the_committed_query() {
    let controller = ready_controller().await;

    controller.set_query("sweden");
    // the query has not committed yet, so the chip click filters on ""
    controller
        .set_criteria(CriteriaPatch::new().country("Norway"))
        .unwrap();
    assert_eq!(result_ids(&controller), ["r1", "r2"]);

    // once the debounce fires, "sweden" applies on top of the criteria
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(controller.results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn clear_resets_everything_and_cancels_pending_queries() {
    let controller = ready_controller().await;
    controller
        .set_criteria(CriteriaPatch::new().country("Sweden"))
        .unwrap();
    controller.set_query("birch");
    let before_clear = controller.recompute_count();

    controller.clear();
    assert_eq!(controller.query(), "");
    assert_eq!(controller.criteria(), FilterCriteria::default());
    assert_eq!(result_ids(&controller), ["r1", "r2", "r3"]);

    // the pending "birch" timer must not fire after the reset
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(controller.recompute_count(), before_clear + 1);
    assert_eq!(result_ids(&controller), ["r1", "r2", "r3"]);
}

#[tokio::test]
async fn subscribers_observe_result_changes() {
    let controller = ready_controller().await;
    let mut rx = controller.subscribe();

    controller
        .set_criteria(CriteriaPatch::new().country("Sweden"))
        .unwrap();
    rx.changed().await.unwrap();
    let ids: Vec<String> = rx.borrow().iter().map(|site| site.id.clone()).collect();
    assert_eq!(ids, ["r3"]);
}

#[tokio::test]
async fn controller_suggestions_respect_threshold_and_limit() {
    let store = Arc::new(CatalogStore::new(StaticSource(sample_catalog())));
    store.load().await.unwrap();
    let controller = SearchController::with_config(
        store,
        SearchConfig {
            suggestion_limit: 2,
            ..Default::default()
        },
    );

    assert!(controller.suggestions("a").is_empty());
    let hits = controller.suggestions("al");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0], "Alpine Meadow");
}
