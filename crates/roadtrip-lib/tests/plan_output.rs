mod common;

use roadtrip_lib::{plan_route, RouteRenderMode, RouteRequest};
use serde_json::json;

use common::patched_atlas;

#[test]
fn plan_serializes_with_legs() {
    let atlas = patched_atlas();
    let plan = plan_route(&atlas, &RouteRequest::new("Netherlands", "Austria")).expect("route");

    let value = serde_json::to_value(&plan).expect("plan serializes");
    assert_eq!(
        value,
        json!({
            "start": "Netherlands",
            "goal": "Austria",
            "steps": ["Netherlands", "Germany", "Austria"],
            "legs": [
                {"from": "Netherlands", "to": "Germany", "distance": 577},
                {"from": "Germany", "to": "Austria", "distance": 524}
            ],
            "total_distance": 1101
        })
    );
}

#[test]
fn plain_text_rendering_of_fixture_route() {
    let atlas = patched_atlas();
    let plan = plan_route(&atlas, &RouteRequest::new("France", "Portugal")).expect("route");

    assert_eq!(
        plan.render(RouteRenderMode::PlainText),
        "Route from France to Portugal:\n\
         * France --> Spain (1053 km.)\n\
         * Spain --> Portugal (503 km.)\n\
         Total distance: 1556 km.\n"
    );
}

#[test]
fn country_records_serialize() {
    let atlas = patched_atlas();
    let iceland = atlas.country("Iceland").expect("border list country");

    let value = serde_json::to_value(&iceland).expect("country serializes");
    assert_eq!(value["name"], "Iceland");
    assert_eq!(value["identifier"], "ICE");
    assert_eq!(value["valid"], true);
    assert_eq!(value["edges"], 0);
    assert_eq!(value["neighbours"], json!([]));
}
