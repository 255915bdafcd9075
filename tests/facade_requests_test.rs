mod common;

use anyhow::Result;
use chrono::NaiveDate;
use common::{note_json, reservation_json, room_json, RecordingTransport};
use motel_desk::domain::model::{
    Admin, CleaningState, Customer, Download, NewReservation, NewRoomNote, NoteProgress, NoteType,
    ReservationStatus,
};
use motel_desk::domain::request::{HttpMethod, Payload, ResponseKind};
use motel_desk::{DeskError, PropertyApi, TransportError};
use serde_json::json;
use url::form_urlencoded;

fn facade() -> (RecordingTransport, PropertyApi<RecordingTransport>) {
    let transport = RecordingTransport::new();
    (transport.clone(), PropertyApi::new(transport))
}

fn decoded_query(path_and_query: &str) -> Vec<(String, String)> {
    let query = path_and_query.split_once('?').map(|(_, q)| q).unwrap_or("");
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

#[tokio::test]
async fn test_availability_forwards_dates_unmodified() -> Result<()> {
    let (transport, api) = facade();
    let pairs = [
        ("2024-06-01", "2024-06-03"),
        ("2023-12-31", "2024-01-01"),
        ("2024-02-28", "2024-02-29"),
    ];

    for (check_in, check_out) in pairs {
        transport.respond_json(json!({
            "room_id": "12",
            "check_in": check_in,
            "check_out": check_out,
            "available": true
        }));
        let availability = api.check_room_availability("12", check_in, check_out).await?;
        assert!(availability.available);

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/reservations/room/12/availability");
        assert_eq!(request.query_value("check_in"), Some(check_in));
        assert_eq!(request.query_value("check_out"), Some(check_out));
    }

    Ok(())
}

#[tokio::test]
async fn test_status_with_spaces_round_trips() -> Result<()> {
    let (transport, api) = facade();
    let statuses = ["Checked in", "Checked out", "in progress", "Checked  In "];

    for status in statuses {
        transport.respond_json(reservation_json("r-1", "Checked in"));
        api.update_reservation_status("r-1", status).await?;

        let resolved = transport.last_request().resolved_path("/api");
        assert!(!resolved.contains(' '));
        assert!(!resolved.contains('+'));
        assert_eq!(
            decoded_query(&resolved),
            vec![("status".to_string(), status.to_string())]
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_status_accepts_typed_value() -> Result<()> {
    let (transport, api) = facade();
    transport.respond_json(reservation_json("r-9", "Checked out"));

    let reservation = api
        .update_reservation_status("r-9", ReservationStatus::CheckedOut)
        .await?;

    assert_eq!(reservation.status, ReservationStatus::CheckedOut);
    assert_eq!(
        transport.last_request().resolved_path("/api"),
        "/api/reservations/r-9/status?status=Checked%20out"
    );
    Ok(())
}

#[tokio::test]
async fn test_room_notes_distinguish_empty_progress_from_absent() -> Result<()> {
    let (transport, api) = facade();

    transport.respond_json(json!([]));
    api.get_room_notes(None, Some("")).await?;
    let explicit_empty = transport.last_request();
    assert!(explicit_empty.has_query("progress"));
    assert_eq!(explicit_empty.query_value("progress"), Some(""));
    assert!(!explicit_empty.has_query("room_id"));
    assert_eq!(explicit_empty.resolved_path("/api"), "/api/room-notes/?progress=");

    transport.respond_json(json!([]));
    api.get_room_notes(None, None).await?;
    let absent = transport.last_request();
    assert!(!absent.has_query("progress"));
    assert_eq!(absent.resolved_path("/api"), "/api/room-notes/");

    transport.respond_json(json!([note_json("n-1", "12", "urgent", Some("In progress"))]));
    let notes = api
        .get_room_notes(Some("12"), Some(NoteProgress::InProgress.as_str()))
        .await?;
    assert_eq!(notes.len(), 1);
    assert_eq!(
        transport.last_request().resolved_path("/api"),
        "/api/room-notes/?room_id=12&progress=In%20progress"
    );

    Ok(())
}

#[tokio::test]
async fn test_upcoming_defaults_to_seven_days() -> Result<()> {
    let (transport, api) = facade();
    let body = |days: u32| {
        json!({"days": days, "upcoming_checkins": [], "upcoming_checkouts": []})
    };

    transport.respond_json(body(7));
    api.get_upcoming_checkins_checkouts(None).await?;
    assert_eq!(transport.last_request().query_value("days"), Some("7"));

    transport.respond_json(body(3));
    let upcoming = api.get_upcoming_checkins_checkouts(Some(3)).await?;
    assert_eq!(upcoming.days, 3);
    assert_eq!(transport.last_request().query_value("days"), Some("3"));

    Ok(())
}

#[tokio::test]
async fn test_create_then_mark_checked_in() -> Result<()> {
    let (transport, api) = facade();
    let new_reservation = NewReservation {
        customer_id: "c-1".to_string(),
        room_id: "12".to_string(),
        platform_id: "p-1".to_string(),
        check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        guests: 2,
        total_price: 180.0,
        booking_reference: "AGODA-778".to_string(),
        notes: None,
        status: None,
    };

    transport.respond_json(reservation_json("res-42", "Reserved"));
    let created = api.create_reservation(&new_reservation).await?;
    let res_id = created.id.clone().unwrap();

    let create_request = transport.last_request();
    assert_eq!(create_request.method, HttpMethod::Post);
    assert_eq!(create_request.resolved_path("/api"), "/api/reservations/");
    let body = create_request.body.unwrap();
    assert_eq!(body["room_id"], "12");
    assert_eq!(body["check_in"], "2024-06-01");
    assert_eq!(body["check_out"], "2024-06-03");
    assert!(body.get("notes").is_none());

    transport.respond_json(reservation_json("res-42", "Checked in"));
    let updated = api.update_reservation_status(&res_id, "Checked In").await?;
    assert_eq!(updated.status, ReservationStatus::CheckedIn);

    let status_request = transport.last_request();
    assert_eq!(status_request.method, HttpMethod::Put);
    assert_eq!(
        status_request.resolved_path("/api"),
        "/api/reservations/res-42/status?status=Checked%20In"
    );

    Ok(())
}

#[tokio::test]
async fn test_csv_export_without_dates() -> Result<()> {
    let (transport, api) = facade();
    transport.respond(Payload::Binary(Download {
        bytes: b"ID,Room ID\n1,12\n".to_vec(),
        content_type: Some("text/csv".to_string()),
        filename: None,
    }));

    let download = api.export_reservations_csv(None, None).await?;
    assert_eq!(download.bytes, b"ID,Room ID\n1,12\n".to_vec());

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.resolved_path("/api"), "/api/reports/reservations/csv");
    assert!(request.query.is_empty());
    assert_eq!(request.response_kind, ResponseKind::Binary);

    Ok(())
}

#[tokio::test]
async fn test_excel_export_with_partial_range() -> Result<()> {
    let (transport, api) = facade();
    transport.respond(Payload::Binary(Download {
        bytes: vec![0x50, 0x4b, 0x03, 0x04],
        content_type: None,
        filename: Some("reservations_20240601.xlsx".to_string()),
    }));

    api.export_reservations_excel(Some("2024-06-01"), None).await?;

    let request = transport.last_request();
    assert_eq!(
        request.resolved_path("/api"),
        "/api/reports/reservations/excel?start_date=2024-06-01"
    );
    assert!(!request.has_query("end_date"));
    Ok(())
}

#[tokio::test]
async fn test_note_progress_defaults_to_empty() -> Result<()> {
    let (transport, api) = facade();

    transport.respond_json(note_json("n-3", "4", "after_checkout", None));
    api.update_note_progress("n-3", None).await?;
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.resolved_path("/api"), "/api/room-notes/n-3/progress?progress=");

    transport.respond_json(note_json("n-3", "4", "after_checkout", Some("In progress")));
    api.update_note_progress("n-3", Some("In progress")).await?;
    assert_eq!(
        transport.last_request().resolved_path("/api"),
        "/api/room-notes/n-3/progress?progress=In%20progress"
    );

    Ok(())
}

#[tokio::test]
async fn test_check_in_is_forwarded_every_time() -> Result<()> {
    let (transport, api) = facade();
    transport
        .respond_json(reservation_json("r-5", "Checked in"))
        .fail_with(TransportError::Status {
            path: "/api/checkinout/checkin/r-5".to_string(),
            status: 400,
            message: "Already checked in".to_string(),
        });

    api.check_in("r-5").await?;
    let second = api.check_in("r-5").await;

    assert_eq!(transport.requests().len(), 2);
    assert!(transport
        .requests()
        .iter()
        .all(|r| r.method == HttpMethod::Post && r.path == "/checkinout/checkin/r-5"));
    match second {
        Err(DeskError::Transport(TransportError::Status { status, message, .. })) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Already checked in");
        }
        other => panic!("expected status failure, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_transport_failures_pass_through_unchanged() {
    let (transport, api) = facade();
    let timeout = TransportError::Timeout {
        path: "/api/dashboard/stats".to_string(),
    };
    let network = TransportError::Network {
        path: "/api/rooms/".to_string(),
        message: "connection refused".to_string(),
    };
    transport.fail_with(timeout.clone()).fail_with(network.clone());

    match api.get_dashboard_stats().await {
        Err(DeskError::Transport(err)) => assert_eq!(err, timeout),
        other => panic!("expected timeout, got {:?}", other),
    }
    match api.get_rooms().await {
        Err(DeskError::Transport(err)) => assert_eq!(err, network),
        other => panic!("expected network failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_payloads_are_reported() {
    let (transport, api) = facade();
    transport
        .respond_json(json!({"unexpected": true}))
        .respond(Payload::Binary(Download {
            bytes: vec![1, 2, 3],
            content_type: None,
            filename: None,
        }))
        .respond_json(json!({"message": "not a file"}));

    assert!(matches!(
        api.get_reservations().await,
        Err(DeskError::Decode { .. })
    ));
    assert!(matches!(
        api.get_dashboard_stats().await,
        Err(DeskError::UnexpectedPayload { .. })
    ));
    assert!(matches!(
        api.export_reservations_csv(None, None).await,
        Err(DeskError::UnexpectedPayload { .. })
    ));
}

#[tokio::test]
async fn test_path_identifiers_are_encoded() -> Result<()> {
    let (transport, api) = facade();
    transport
        .respond_json(reservation_json("walk in/7", "Reserved"))
        .respond_json(json!({"message": "Admin deleted successfully"}));

    api.get_reservation("walk in/7").await?;
    assert_eq!(transport.last_request().path, "/reservations/walk%20in%2F7");

    let ack = api.delete_admin("7").await?;
    assert_eq!(ack.message, "Admin deleted successfully");
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.path, "/admins/7");

    Ok(())
}

#[tokio::test]
async fn test_read_endpoints_hit_expected_paths() -> Result<()> {
    let (transport, api) = facade();
    transport
        .respond_json(json!({"check_ins": [], "check_outs": [], "date": "2024-06-01"}))
        .respond_json(json!({"year": 2024, "month": 6, "reservations": [reservation_json("r-1", "Reserved")]}))
        .respond_json(json!({
            "year": 2024, "week": 23, "week_start": "2024-06-03", "week_end": "2024-06-09", "reservations": []
        }))
        .respond_json(json!({"start_date": "2024-06-01", "end_date": "2024-06-02", "daily_data": [
            {"date": "2024-06-01", "revenue": 180.0, "reservations": 1, "check_ins": 1, "check_outs": 0}
        ]}))
        .respond_json(json!({"year": 2024, "monthly_data": []}))
        .respond_json(json!({"start_date": "2024-06-01", "end_date": "2024-06-30", "platform_data": [
            {"platform": "Agoda", "platform_id": "p-1", "revenue": 540.0, "reservations": 3}
        ]}))
        .respond_json(json!({"customer_id": "c-1", "reservations": []}))
        .respond_json(json!({"urgent_notes": [], "after_checkout_notes": [], "total_count": 0}));

    api.get_check_in_out_summary().await?;
    let month = api.get_month_reservations(2024, 6).await?;
    assert_eq!(month.reservations.len(), 1);
    api.get_week_reservations(2024, 23).await?;
    let daily = api.get_daily_revenue("2024-06-01", "2024-06-02").await?;
    assert_eq!(daily.daily_data[0].revenue, 180.0);
    api.get_monthly_revenue(2024).await?;
    let platform = api.get_platform_revenue("2024-06-01", "2024-06-30").await?;
    assert_eq!(platform.platform_data[0].platform, "Agoda");
    api.get_customer_reservations("c-1").await?;
    api.get_all_alerts().await?;

    let paths: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| r.resolved_path("/api"))
        .collect();
    assert_eq!(
        paths,
        vec![
            "/api/dashboard/checkin-out",
            "/api/calendar/month/2024/6",
            "/api/calendar/week/2024/23",
            "/api/revenue/daily/2024-06-01/2024-06-02",
            "/api/revenue/monthly/2024",
            "/api/revenue/platform/2024-06-01/2024-06-30",
            "/api/customers/c-1/reservations",
            "/api/room-notes/alerts",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_cleaning_tasks_use_fresh_reads() -> Result<()> {
    let (transport, api) = facade();
    transport
        .respond_json(json!([room_json("1", "cleaning"), room_json("2", "available")]))
        .respond_json(json!({
            "after_checkout_notes": [note_json("n-8", "2", "after_checkout", Some("confirm"))],
            "count": 1
        }));

    let tasks = api.get_cleaning_tasks().await?;
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.state() == CleaningState::Pending));
    assert_eq!(tasks[1].open_note_ids, vec!["n-8".to_string()]);

    let paths: Vec<String> = transport.requests().iter().map(|r| r.path.clone()).collect();
    assert_eq!(paths, vec!["/rooms/", "/room-notes/after-checkout"]);

    transport.respond_json(room_json("1", "available"));
    let room = api.complete_cleaning("1").await?;
    assert_eq!(transport.last_request().method, HttpMethod::Post);
    assert_eq!(transport.last_request().path, "/cleaning/complete/1");
    assert_eq!(room.room_number, "101");

    Ok(())
}

#[tokio::test]
async fn test_plain_reads_hit_expected_paths() -> Result<()> {
    let (transport, api) = facade();
    let customer = json!({"id": "c-1", "name": "Lin Mei", "email": null, "phone": "0912", "nationality": "TW"});
    let admin = json!({"id": "7", "name": "Chen", "email": null, "phone": null, "role": "manager", "is_active": true});
    transport
        .respond_json(json!([reservation_json("r-1", "Reserved")]))
        .respond_json(room_json("3", "occupied"))
        .respond_json(json!([customer.clone()]))
        .respond_json(customer)
        .respond_json(json!({"cleaning_rooms": [room_json("1", "cleaning")], "count": 1}))
        .respond_json(json!([admin.clone()]))
        .respond_json(admin)
        .respond_json(json!({"urgent_notes": [note_json("n-1", "3", "urgent", None)], "count": 1}))
        .respond_json(json!({"after_checkout_notes": [], "count": 0}));

    assert_eq!(api.get_reservations().await?.len(), 1);
    assert_eq!(api.get_room("3").await?.room_number, "103");
    assert_eq!(api.get_customers().await?.len(), 1);
    assert_eq!(api.get_customer("c-1").await?.name, "Lin Mei");
    assert_eq!(api.get_cleaning_rooms().await?.count, 1);
    assert_eq!(api.get_admins().await?.len(), 1);
    assert_eq!(api.get_admin("7").await?.role.as_deref(), Some("manager"));
    assert!(api.get_urgent_notes().await?.urgent_notes[0].is_urgent());
    assert_eq!(api.get_after_checkout_notes().await?.count, 0);

    let requests = transport.requests();
    assert!(requests.iter().all(|r| r.method == HttpMethod::Get && r.body.is_none()));
    let paths: Vec<String> = requests.iter().map(|r| r.resolved_path("/api")).collect();
    assert_eq!(
        paths,
        vec![
            "/api/reservations/",
            "/api/rooms/3",
            "/api/customers/",
            "/api/customers/c-1",
            "/api/cleaning/rooms",
            "/api/admins/",
            "/api/admins/7",
            "/api/room-notes/urgent",
            "/api/room-notes/after-checkout",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_writes_use_expected_verbs_and_bodies() -> Result<()> {
    let (transport, api) = facade();
    transport
        .respond_json(json!({"id": "c-9", "name": "Sato", "email": "sato@example.jp", "phone": null, "nationality": "JP"}))
        .respond_json(json!({"id": "8", "name": "Wang", "email": null, "phone": null, "role": "staff", "is_active": true}))
        .respond_json(note_json("n-5", "4", "urgent", None))
        .respond_json(note_json("n-5", "4", "urgent", Some("finished")))
        .respond_json(reservation_json("r-3", "Checked out"));

    api.create_customer(&Customer {
        id: None,
        name: "Sato".to_string(),
        email: Some("sato@example.jp".to_string()),
        phone: None,
        nationality: Some("JP".to_string()),
    })
    .await?;
    api.create_admin(&Admin {
        id: None,
        name: "Wang".to_string(),
        email: None,
        phone: None,
        role: Some("staff".to_string()),
        is_active: true,
    })
    .await?;
    api.create_room_note(&NewRoomNote {
        room_id: "4".to_string(),
        admin_id: "8".to_string(),
        note_type: NoteType::Urgent,
        title: "Leak".to_string(),
        description: "Bathroom sink".to_string(),
        reservation_id: None,
        progress: None,
    })
    .await?;
    api.complete_room_note("n-5").await?;
    let checked_out = api.check_out("r-3").await?;
    assert_eq!(checked_out.status, ReservationStatus::CheckedOut);

    let requests = transport.requests();
    let calls: Vec<(HttpMethod, String)> = requests
        .iter()
        .map(|r| (r.method, r.resolved_path("/api")))
        .collect();
    assert_eq!(
        calls,
        vec![
            (HttpMethod::Post, "/api/customers/".to_string()),
            (HttpMethod::Post, "/api/admins/".to_string()),
            (HttpMethod::Post, "/api/room-notes/".to_string()),
            (HttpMethod::Post, "/api/room-notes/n-5/complete".to_string()),
            (HttpMethod::Post, "/api/checkinout/checkout/r-3".to_string()),
        ]
    );

    let customer_body = requests[0].body.clone().unwrap();
    assert_eq!(customer_body["name"], "Sato");
    assert_eq!(customer_body["nationality"], "JP");
    assert!(customer_body.get("id").is_none());

    let admin_body = requests[1].body.clone().unwrap();
    assert_eq!(admin_body["role"], "staff");
    assert_eq!(admin_body["is_active"], true);
    assert!(admin_body.get("id").is_none());

    let note_body = requests[2].body.clone().unwrap();
    assert_eq!(note_body["note_type"], "urgent");
    assert_eq!(note_body["room_id"], "4");
    assert!(note_body.get("progress").is_none());

    assert!(requests[3].body.is_none());
    assert!(requests[4].body.is_none());

    Ok(())
}

#[tokio::test]
async fn test_lists_survive_unexpected_enum_values() -> Result<()> {
    let (transport, api) = facade();
    transport
        .respond_json(json!([
            reservation_json("r-1", "Reserved"),
            reservation_json("r-2", "No show")
        ]))
        .respond_json(json!([
            note_json("n-1", "3", "", None),
            note_json("n-2", "3", "after_checkout", Some("confirm"))
        ]));

    let reservations = api.get_reservations().await?;
    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[1].status, ReservationStatus::Unknown);

    let notes = api.get_room_notes(Some("3"), None).await?;
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].note_type, NoteType::Other);
    assert!(notes[1].is_after_checkout());

    Ok(())
}
