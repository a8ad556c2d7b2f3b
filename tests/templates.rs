use tera::{Context, Tera};

fn templates() -> Tera {
    Tera::new("templates/**/*").unwrap()
}

#[test]
fn every_template_parses() {
    let tera = templates();
    for name in [
        "base.html",
        "auth/login.html",
        "main/dashboard.html",
        "events/index.html",
        "events/show.html",
        "speakers/index.html",
        "sponsors/index.html",
        "attendees/index.html",
        "agenda_items/index.html",
        "errors/not_found.html",
        "errors/error.html",
    ] {
        assert!(
            tera.get_template_names().any(|loaded| loaded == name),
            "{name} missing"
        );
    }
}

#[test]
fn login_page_renders_alerts_without_navigation() {
    let tera = templates();
    let mut context = Context::new();
    context.insert("alerts", &vec![("Invalid email or password.", "danger")]);
    context.insert("current_user", &Option::<()>::None);
    context.insert("current_page", "login");

    let body = tera.render("auth/login.html", &context).unwrap();
    assert!(body.contains("alert-danger"));
    assert!(body.contains("Invalid email or password."));
    assert!(!body.contains("/logout"));
}

#[test]
fn not_found_page_names_the_event() {
    let tera = templates();
    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert("current_user", &serde_json::json!({ "email": "admin@example.com" }));
    context.insert("current_page", "events");
    context.insert("event_id", "evt-42");

    let body = tera.render("errors/not_found.html", &context).unwrap();
    assert!(body.contains("evt-42"));
    assert!(body.contains("admin@example.com"));
}
