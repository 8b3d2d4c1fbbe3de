use bikeshare_planner::{GbfsClient, OrsClient, Planner, PlannerError, Point, TravelProfile};
use httpmock::prelude::*;
use serde_json::json;

fn gbfs_information() -> serde_json::Value {
    json!({
        "last_updated": 1723581234,
        "ttl": 15,
        "data": {"stations": [
            {"station_id": "7010", "name": "Near Source", "lat": 43.651, "lon": -79.381, "capacity": 20},
            {"station_id": "7011", "name": "Near Destination", "lat": 43.669, "lon": -79.399, "capacity": 25}
        ]}
    })
}

fn gbfs_status(source_bikes: u32, dest_docks: u32) -> serde_json::Value {
    json!({
        "last_updated": 1723581234,
        "ttl": 15,
        "data": {"stations": [
            {"station_id": "7010", "num_bikes_available": source_bikes, "num_docks_available": 2,
             "is_renting": 1, "is_returning": 1, "is_installed": 1, "status": "IN_SERVICE"},
            {"station_id": "7011", "num_bikes_available": 1, "num_docks_available": dest_docks,
             "is_renting": 1, "is_returning": 1, "is_installed": 1, "status": "IN_SERVICE"}
        ]}
    })
}

fn ors_directions() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": [[-79.381, 43.651], [-79.390, 43.660], [-79.399, 43.669]]
            }
        }]
    })
}

fn planner_against(server: &MockServer) -> Planner<GbfsClient, OrsClient> {
    let feed = GbfsClient::new(
        server.url("/gbfs/station_information"),
        server.url("/gbfs/station_status"),
    );
    let routing = OrsClient::with_default_timeout(server.base_url(), "test-key").unwrap();
    Planner::new(feed, routing)
}

fn mock_feed(server: &MockServer, status: serde_json::Value) {
    server.mock(|when, then| {
        when.method(GET).path("/gbfs/station_information");
        then.status(200).json_body(gbfs_information());
    });
    server.mock(|when, then| {
        when.method(GET).path("/gbfs/station_status");
        then.status(200).json_body(status);
    });
}

#[tokio::test]
async fn trip_end_to_end_produces_three_legs() {
    let server = MockServer::start();
    mock_feed(&server, gbfs_status(5, 10));

    let walk_mock = server.mock(|when, then| {
        when.method(POST).path("/v2/directions/foot-walking/geojson");
        then.status(200).json_body(ors_directions());
    });
    let cycle_mock = server.mock(|when, then| {
        when.method(POST).path("/v2/directions/cycling-regular/geojson");
        then.status(200).json_body(ors_directions());
    });

    let planner = planner_against(&server);
    let report = planner
        .trip(Point::new(43.65, -79.38), Point::new(43.67, -79.40))
        .await
        .unwrap();

    let plan = report.plan.expect("both stations available");
    assert_eq!(plan.bike_station.station.station_id, 7010);
    assert_eq!(plan.dock_station.station.station_id, 7011);

    // Walk, cycle, walk, in that order, with fixed per-role colors.
    assert_eq!(plan.legs.len(), 3);
    assert_eq!(plan.legs[0].profile, TravelProfile::FootWalking);
    assert_eq!(plan.legs[1].profile, TravelProfile::CyclingRegular);
    assert_eq!(plan.legs[2].profile, TravelProfile::FootWalking);
    assert_ne!(plan.legs[0].encoding.color, plan.legs[1].encoding.color);
    assert_eq!(walk_mock.hits(), 2);
    assert_eq!(cycle_mock.hits(), 1);

    // Polyline handed back in (lat, lon) order.
    assert_eq!(plan.legs[0].polyline[0], Point::new(43.651, -79.381));
}

#[tokio::test]
async fn trip_without_dock_stations_reports_null_plan() {
    let server = MockServer::start();
    // Bikes at the source, but zero docks anywhere near the destination.
    mock_feed(
        &server,
        json!({
            "last_updated": 1723581234,
            "ttl": 15,
            "data": {"stations": [
                {"station_id": "7010", "num_bikes_available": 5, "num_docks_available": 0,
                 "is_renting": 1, "is_returning": 1, "is_installed": 1, "status": "IN_SERVICE"},
                {"station_id": "7011", "num_bikes_available": 1, "num_docks_available": 4,
                 "is_renting": 1, "is_returning": 0, "is_installed": 1, "status": "IN_SERVICE"}
            ]}
        }),
    );
    let ors_mock = server.mock(|when, then| {
        when.method(POST).path_contains("/v2/directions");
        then.status(200).json_body(ors_directions());
    });

    let planner = planner_against(&server);
    let report = planner
        .trip(Point::new(43.65, -79.38), Point::new(43.67, -79.40))
        .await
        .unwrap();

    assert!(report.plan.is_none());
    assert_eq!(ors_mock.hits(), 0, "no routing calls without a station pair");

    let rendered: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
    assert!(rendered["plan"].is_null());
}

#[tokio::test]
async fn failing_cycling_leg_aborts_the_whole_trip() {
    let server = MockServer::start();
    mock_feed(&server, gbfs_status(5, 10));

    server.mock(|when, then| {
        when.method(POST).path("/v2/directions/foot-walking/geojson");
        then.status(200).json_body(ors_directions());
    });
    // Second leg of the itinerary fails.
    server.mock(|when, then| {
        when.method(POST).path("/v2/directions/cycling-regular/geojson");
        then.status(502);
    });

    let planner = planner_against(&server);
    let err = planner
        .trip(Point::new(43.65, -79.38), Point::new(43.67, -79.40))
        .await
        .unwrap_err();

    match err {
        PlannerError::UpstreamRoutingFailure {
            from, to, profile, ..
        } => {
            // The failure names the cycling leg: station to station.
            assert_eq!(from, Point::new(43.651, -79.381));
            assert_eq!(to, Point::new(43.669, -79.399));
            assert_eq!(profile, TravelProfile::CyclingRegular);
        }
        other => panic!("expected UpstreamRoutingFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn degenerate_single_station_trip_still_routes_three_legs() {
    let server = MockServer::start();
    // One station serving both roles.
    server.mock(|when, then| {
        when.method(GET).path("/gbfs/station_information");
        then.status(200).json_body(json!({
            "last_updated": 1723581234,
            "ttl": 15,
            "data": {"stations": [
                {"station_id": "7010", "name": "Only One", "lat": 43.66, "lon": -79.39, "capacity": 20}
            ]}
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/gbfs/station_status");
        then.status(200).json_body(json!({
            "last_updated": 1723581234,
            "ttl": 15,
            "data": {"stations": [
                {"station_id": "7010", "num_bikes_available": 5, "num_docks_available": 5,
                 "is_renting": 1, "is_returning": 1, "is_installed": 1, "status": "IN_SERVICE"}
            ]}
        }));
    });
    let ors_mock = server.mock(|when, then| {
        when.method(POST).path_contains("/v2/directions");
        then.status(200).json_body(ors_directions());
    });

    let planner = planner_against(&server);
    let report = planner
        .trip(Point::new(43.65, -79.38), Point::new(43.67, -79.40))
        .await
        .unwrap();

    let plan = report.plan.expect("single station serves both roles");
    assert_eq!(
        plan.bike_station.station.station_id,
        plan.dock_station.station.station_id
    );
    assert_eq!(plan.legs.len(), 3);
    assert_eq!(plan.legs[1].from, plan.legs[1].to);
    assert_eq!(ors_mock.hits(), 3);
}
