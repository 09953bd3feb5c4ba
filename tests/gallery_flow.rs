use crux_core::testing::AppTester;
use crux_http::protocol::{HttpResponse, HttpResult};
use serde_json::json;
use shared::{App, Effect, Event, ImageId, Model};

fn images_body(records: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&json!({ "data": records })).expect("body serializes")
}

fn three_records() -> serde_json::Value {
    json!([
        {"id": "a", "title": "First", "description": "one", "url": "https://host/a.png", "ts": 1},
        {"id": "b", "title": "Second", "description": "two", "url": "https://host/b.png", "ts": 2},
        {"id": "c", "title": "Third", "description": "three", "url": "https://host/c.png", "ts": 3},
    ])
}

#[test]
fn startup_fetch_renders_cards_in_order() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    // 1. Startup issues the collection fetch.
    let update = app.update(Event::AppStarted, &mut model);
    assert!(model.is_refreshing);

    let mut request = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("fetch requested");
    assert_eq!(request.operation.method, "GET");
    assert_eq!(request.operation.url, "https://api.picwall.app/api/images");

    // 2. Resolve with three records.
    let response = HttpResponse::ok().body(images_body(three_records())).build();
    let update = app
        .resolve(&mut request, HttpResult::Ok(response))
        .expect("resolves");
    for event in update.events {
        let _ = app.update(event, &mut model);
    }

    // 3. Exactly three cards, in collection order.
    assert!(!model.is_refreshing);
    assert!(!model.load_failed);
    let view = app.view(&model);
    let ids: Vec<&str> = view.gallery.cards.iter().map(|card| card.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn tapping_the_second_card_opens_its_image_and_dismissal_closes() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::AppStarted, &mut model);
    let mut request = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("fetch requested");
    let response = HttpResponse::ok().body(images_body(three_records())).build();
    let update = app
        .resolve(&mut request, HttpResult::Ok(response))
        .expect("resolves");
    for event in update.events {
        let _ = app.update(event, &mut model);
    }

    // Tap the second card.
    let second_id = app.view(&model).gallery.cards[1].id.clone();
    let _ = app.update(
        Event::CardTapped {
            id: ImageId::new(second_id),
        },
        &mut model,
    );

    let view = app.view(&model);
    let overlay = view.overlay.expect("overlay mounted");
    assert_eq!(overlay.image_url, "https://host/b.png");

    // Dismissal unmounts the overlay.
    let _ = app.update(Event::OverlayDismissed, &mut model);
    assert!(app.view(&model).overlay.is_none());
}

#[test]
fn empty_collection_renders_zero_cards_without_error() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::AppStarted, &mut model);
    let mut request = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("fetch requested");
    let response = HttpResponse::ok().body(images_body(json!([]))).build();
    let update = app
        .resolve(&mut request, HttpResult::Ok(response))
        .expect("resolves");
    for event in update.events {
        let _ = app.update(event, &mut model);
    }

    let view = app.view(&model);
    assert!(view.gallery.cards.is_empty());
    assert!(!view.gallery.load_failed);
}

#[test]
fn records_without_id_or_url_are_dropped_at_ingest() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::AppStarted, &mut model);
    let mut request = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("fetch requested");
    let body = images_body(json!([
        {"id": "a", "title": "Kept", "description": "ok", "url": "https://host/a.png", "ts": 1},
        {"id": "", "title": "No id", "description": "drop", "url": "https://host/x.png", "ts": 2},
        {"id": "c", "title": "No url", "description": "drop", "url": "", "ts": 3},
    ]));
    let update = app
        .resolve(&mut request, HttpResult::Ok(HttpResponse::ok().body(body).build()))
        .expect("resolves");
    for event in update.events {
        let _ = app.update(event, &mut model);
    }

    let view = app.view(&model);
    let ids: Vec<&str> = view.gallery.cards.iter().map(|card| card.id.as_str()).collect();
    assert_eq!(ids, ["a"]);
}

#[test]
fn failed_fetch_flags_the_error_surface_and_keeps_cached_records() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    // Seed a loaded collection.
    let update = app.update(Event::AppStarted, &mut model);
    let mut request = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("fetch requested");
    let body = images_body(json!([
        {"id": "a", "title": "First", "description": "one", "url": "https://host/a.png", "ts": 1},
    ]));
    let update = app
        .resolve(&mut request, HttpResult::Ok(HttpResponse::ok().body(body).build()))
        .expect("resolves");
    for event in update.events {
        let _ = app.update(event, &mut model);
    }

    // A later refresh fails server-side.
    let update = app.update(Event::RefreshRequested, &mut model);
    let mut request = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("refresh requested");
    let update = app
        .resolve(&mut request, HttpResult::Ok(HttpResponse::status(500).build()))
        .expect("resolves");
    for event in update.events {
        let _ = app.update(event, &mut model);
    }

    let view = app.view(&model);
    assert!(view.gallery.load_failed);
    assert_eq!(view.gallery.cards.len(), 1, "cached records are kept");
}

#[test]
fn refresh_is_deduplicated_while_one_is_in_flight() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::AppStarted, &mut model);
    let fetched = update
        .effects
        .iter()
        .any(|effect| matches!(effect, Effect::Http(_)));
    assert!(fetched);

    // A second request while refreshing issues no new fetch.
    let update = app.update(Event::RefreshRequested, &mut model);
    let fetched_again = update
        .effects
        .iter()
        .any(|effect| matches!(effect, Effect::Http(_)));
    assert!(!fetched_again);
}
