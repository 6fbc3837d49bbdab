mod common;

use axum::http::{header, StatusCode};
use common::*;
use ctrlxploit::{
    domain::{BlogType, CreateLevelRequest, CreateMemberRequest, Level},
    repository::{
        AnnouncementRepository, BlogRepository, LevelRepository, MemberRepository,
        ProjectRepository,
    },
};
use tower::ServiceExt;

const MEMBER_CARD: &str = r#"class="card member-card""#;

fn selected_option(value: &str) -> String {
    format!(r#"<option value="{}" selected>"#, value)
}

async fn seed_level(state: &ctrlxploit::api::state::AppState, name: &str, position: i64) -> anyhow::Result<Level> {
    Ok(state.service_context.level_repo.create(CreateLevelRequest {
        name: name.to_string(),
        color: "emerald".to_string(),
        border_color: "emerald".to_string(),
        icon: "crown".to_string(),
        position,
    }).await?)
}

#[tokio::test]
async fn anonymous_admin_requests_redirect_to_login() -> anyhow::Result<()> {
    let (app, _, _) = test_app().await?;

    for uri in ["/admin", "/admin/members", "/admin/blogs"] {
        let response = app.clone().oneshot(get(uri)).await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    let response = app
        .oneshot(post_form("/admin/members", None, "username=x&level_id=y"))
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
async fn unknown_session_token_redirects_to_login() -> anyhow::Result<()> {
    let (app, _, _) = test_app().await?;

    let response = app
        .oneshot(get_with_cookie("/admin/members", "session=not-a-real-token"))
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    Ok(())
}

#[tokio::test]
async fn user_without_profile_is_forbidden() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let auth = &state.service_context.auth_service;

    let user_id = auth.create_user("visitor", "hunter22").await?;
    let (_, token) = auth.create_session(user_id, 1).await?;

    let response = app
        .oneshot(get_with_cookie("/admin", &format!("session={}", token)))
        .await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(body_string(response).await?.contains("Your account does not have admin access."));

    Ok(())
}

#[tokio::test]
async fn login_sets_session_cookie() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    admin_cookie(&state, "admin").await?;

    let response = app
        .clone()
        .oneshot(post_form("/login", None, "username=admin&password=hunter22"))
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str()?.to_string();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));

    // The issued cookie opens the dashboard
    let session = set_cookie.split(';').next().unwrap_or_default().to_string();
    let response = app.oneshot(get_with_cookie("/admin", &session)).await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    admin_cookie(&state, "admin").await?;

    for body in ["username=admin&password=wrong", "username=nobody&password=hunter22", ""] {
        let response = app.clone().oneshot(post_form("/login", None, body)).await?;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{:?}", body);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body_string(response).await?.contains("Invalid login credentials"));
    }

    Ok(())
}

#[tokio::test]
async fn logout_ends_the_session() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app.clone().oneshot(post_form("/logout", Some(&cookie), "")).await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let response = app.oneshot(get_with_cookie("/admin", &cookie)).await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    Ok(())
}

#[tokio::test]
async fn dashboard_greets_the_admin() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "r00t").await?;

    let response = app.oneshot(get_with_cookie("/admin", &cookie)).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await?;
    assert!(body.contains("r00t"));
    assert!(body.contains("Members"));
    assert!(body.contains("Announcements"));

    Ok(())
}

#[tokio::test]
async fn empty_members_panel_shows_empty_state() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let body = body_string(app.oneshot(get_with_cookie("/admin/members", &cookie)).await?).await?;
    assert!(body.contains("No members found. Add your first member above!"));
    assert_eq!(body.matches(MEMBER_CARD).count(), 0);

    Ok(())
}

#[tokio::test]
async fn adding_a_member_shows_it_and_resets_the_form() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;
    let root = seed_level(&state, "Root", 0).await?;
    let sys_admin = seed_level(&state, "Sys-Admin", 2).await?;

    let response = app
        .oneshot(post_form(
            "/admin/members",
            Some(&cookie),
            &format!("username=SPYD3R&level_id={}", sys_admin.id),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await?;
    assert!(body.contains("Member added successfully!"));
    assert_eq!(body.matches(MEMBER_CARD).count(), 1);
    assert!(body.contains("SPYD3R"));
    assert!(body.contains(r#"<input id="new-username" name="username" type="text" value="" required>"#));

    // Create select is back on the first level; only the new card's edit
    // form selects Sys-Admin.
    assert_eq!(body.matches(&selected_option(&root.id.to_string())).count(), 1);
    assert_eq!(body.matches(&selected_option(&sys_admin.id.to_string())).count(), 1);

    let members = state.service_context.member_repo.list().await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].level_id, Some(sys_admin.id));

    Ok(())
}

#[tokio::test]
async fn rejected_member_keeps_the_chosen_level() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;
    let root = seed_level(&state, "Root", 0).await?;
    let club = seed_level(&state, "Club", 3).await?;

    let response = app
        .oneshot(post_form(
            "/admin/members",
            Some(&cookie),
            &format!("username=+&level_id={}", club.id),
        ))
        .await?;
    let body = body_string(response).await?;

    assert!(body.contains("Username and level are required"));
    assert_eq!(body.matches(&selected_option(&club.id.to_string())).count(), 1);
    assert_eq!(body.matches(&selected_option(&root.id.to_string())).count(), 0);

    Ok(())
}

#[tokio::test]
async fn adding_a_member_requires_username_and_level() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;
    let level = seed_level(&state, "Club", 0).await?;

    for body in [format!("username=&level_id={}", level.id), "username=v1per&level_id=".to_string()] {
        let response = app.clone().oneshot(post_form("/admin/members", Some(&cookie), &body)).await?;
        assert!(body_string(response).await?.contains("Username and level are required"));
    }

    assert!(state.service_context.member_repo.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn deleting_a_member_removes_only_that_member() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;
    let level = seed_level(&state, "Root", 0).await?;
    let repo = &state.service_context.member_repo;

    let keep = repo.create(CreateMemberRequest { username: "TheAlpha".to_string(), level_id: level.id }).await?;
    let gone = repo.create(CreateMemberRequest { username: "begula03".to_string(), level_id: level.id }).await?;

    let response = app
        .oneshot(post_form(&format!("/admin/members/{}/delete", gone.id), Some(&cookie), ""))
        .await?;
    let body = body_string(response).await?;

    assert!(body.contains("Member deleted successfully!"));
    assert_eq!(body.matches(MEMBER_CARD).count(), 1);
    assert!(body.contains("TheAlpha"));
    assert!(!body.contains("begula03"));

    let remaining = repo.list().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    Ok(())
}

#[tokio::test]
async fn malformed_member_id_is_reported() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .oneshot(post_form("/admin/members/not-a-uuid/delete", Some(&cookie), ""))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await?.contains("Invalid member ID"));

    Ok(())
}

#[tokio::test]
async fn updating_a_member_moves_it_to_another_level() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;
    let club = seed_level(&state, "Club", 1).await?;
    let moderator = seed_level(&state, "Moderator", 0).await?;
    let repo = &state.service_context.member_repo;

    let member = repo.create(CreateMemberRequest { username: "Drago".to_string(), level_id: club.id }).await?;

    let response = app
        .oneshot(post_form(
            &format!("/admin/members/{}/update", member.id),
            Some(&cookie),
            &format!("username=Drago&level_id={}", moderator.id),
        ))
        .await?;
    assert!(body_string(response).await?.contains("Member updated successfully!"));

    let updated = repo.find_by_id(member.id).await?.expect("member still exists");
    assert_eq!(updated.level.map(|l| l.name), Some("Moderator".to_string()));

    Ok(())
}

#[tokio::test]
async fn blog_with_invalid_url_is_rejected() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .oneshot(post_form(
            "/admin/blogs",
            Some(&cookie),
            "title=Pwn+101&description=Basics&blog_type=pdf&content_url=not+a+url",
        ))
        .await?;
    assert!(body_string(response).await?.contains("Please enter a valid URL for the content"));
    assert!(state.service_context.blog_repo.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn creating_a_blog_records_author_and_slug() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "r00t").await?;

    let response = app
        .oneshot(post_form(
            "/admin/blogs",
            Some(&cookie),
            &form_body(&[
                ("title", "PicoCTF 2024 Writeup"),
                ("description", "All the flags"),
                ("blog_type", "markdown"),
                ("content_url", "https://raw.example/pico.md"),
                ("tags", "ctf, writeup"),
                ("published", "on"),
            ]),
        ))
        .await?;
    assert!(body_string(response).await?.contains("Blog post created successfully!"));

    let blogs = state.service_context.blog_repo.list().await?;
    assert_eq!(blogs.len(), 1);
    let blog = &blogs[0];
    assert_eq!(blog.slug, "picoctf-2024-writeup");
    assert_eq!(blog.created_by.as_deref(), Some("r00t"));
    assert_eq!(blog.blog_type, BlogType::Markdown);
    assert_eq!(blog.tags, vec!["ctf", "writeup"]);
    assert!(blog.published);

    Ok(())
}

#[tokio::test]
async fn announcement_requires_title() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .oneshot(post_form("/admin/announcements", Some(&cookie), "title=&description=Soon"))
        .await?;
    assert!(body_string(response).await?.contains("Title and description are required"));
    assert!(state.service_context.announcement_repo.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn scheduled_announcement_is_stored_but_not_public() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .clone()
        .oneshot(post_form(
            "/admin/announcements",
            Some(&cookie),
            "title=Pearl+CTF+2099&description=Registrations+open&scheduled_at=2099-01-01T10%3A00",
        ))
        .await?;
    assert!(body_string(response).await?.contains("Announcement posted successfully!"));

    let stored = state.service_context.announcement_repo.list().await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].created_by, "admin");

    let public = body_string(app.oneshot(get("/announcements")).await?).await?;
    assert!(!public.contains("Pearl CTF 2099"));

    Ok(())
}

#[tokio::test]
async fn resource_with_unknown_category_is_rejected() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .oneshot(post_form(
            "/admin/resources",
            Some(&cookie),
            "heading=HTB&description=Boxes&category=Podcast&link=https%3A%2F%2Fhackthebox.com",
        ))
        .await?;
    assert!(body_string(response).await?.contains("Please choose a valid category"));

    Ok(())
}

#[tokio::test]
async fn project_created_from_admin_appears_publicly() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .clone()
        .oneshot(post_form(
            "/admin/projects",
            Some(&cookie),
            &form_body(&[
                ("name", "Hash Analyzer"),
                ("short_detail", "Cracks hashes"),
                ("image_url", "https://img.example/h.png"),
                ("github_url", "https://github.com/club/hash"),
                ("live_demo", ""),
                ("technologies", "C++, Qt"),
            ]),
        ))
        .await?;
    assert!(body_string(response).await?.contains("Project added successfully!"));

    let public = body_string(app.oneshot(get("/projects")).await?).await?;
    assert!(public.contains("Hash Analyzer"));

    Ok(())
}

#[tokio::test]
async fn deleting_a_missing_member_reports_an_error() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .oneshot(post_form(
            &format!("/admin/members/{}/delete", uuid::Uuid::new_v4()),
            Some(&cookie),
            "",
        ))
        .await?;
    let body = body_string(response).await?;

    assert!(body.contains("Error deleting member"));
    assert!(!body.contains("Member deleted successfully!"));

    Ok(())
}

#[tokio::test]
async fn rejected_blog_keeps_what_was_typed() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "r00t").await?;

    let response = app
        .oneshot(post_form(
            "/admin/blogs",
            Some(&cookie),
            &form_body(&[
                ("title", "My Long Writeup"),
                ("description", "Many paragraphs of heap notes"),
                ("blog_type", "pdf"),
                ("content_url", "not a url"),
                ("author", "SRPG"),
                ("tags", "pwn, heap"),
            ]),
        ))
        .await?;
    let body = body_string(response).await?;

    assert!(body.contains("Please enter a valid URL for the content"));
    assert!(body.contains(r#"value="My Long Writeup""#));
    assert!(body.contains(">Many paragraphs of heap notes</textarea>"));
    assert!(body.contains(r#"<option value="pdf" selected>"#));
    assert!(body.contains(r#"value="SRPG""#));
    assert!(body.contains(r#"value="pwn, heap""#));
    // Checkbox was not sent, so it stays unticked
    assert!(body.contains(r#"<input name="published" type="checkbox"> Published"#));

    Ok(())
}

#[tokio::test]
async fn created_blog_resets_the_form_to_defaults() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "r00t").await?;

    let response = app
        .oneshot(post_form(
            "/admin/blogs",
            Some(&cookie),
            &form_body(&[
                ("title", "Fresh Post"),
                ("description", "Short"),
                ("blog_type", "pdf"),
                ("content_url", "https://files.example/fresh.pdf"),
                ("author", "SRPG"),
            ]),
        ))
        .await?;
    let body = body_string(response).await?;

    assert!(body.contains("Blog post created successfully!"));
    assert!(body.contains(r#"<input id="new-title" name="title" type="text" value="" required>"#));
    assert!(body.contains(r#"<input id="new-author" name="author" type="text" value="r00t">"#));
    assert!(body.contains(r#"<option value="markdown" selected>"#));
    assert!(body.contains(r#"<input name="published" type="checkbox" checked> Published"#));

    Ok(())
}

#[tokio::test]
async fn rejected_project_keeps_what_was_typed() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .oneshot(post_form(
            "/admin/projects",
            Some(&cookie),
            &form_body(&[
                ("name", "Hash Analyzer"),
                ("short_detail", "Cracks hashes with wordlists"),
                ("image_url", "https://img.example/h.png"),
                ("github_url", "https://github.com/club/hash"),
                ("technologies", " , "),
            ]),
        ))
        .await?;
    let body = body_string(response).await?;

    assert!(body.contains("Name, details, image URL, GitHub URL and technologies are required"));
    assert!(body.contains(r#"value="Hash Analyzer""#));
    assert!(body.contains(">Cracks hashes with wordlists</textarea>"));
    assert!(body.contains("No projects found. Add your first project above!"));
    assert!(state.service_context.project_repo.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn rejected_announcement_keeps_description_and_schedule() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .oneshot(post_form(
            "/admin/announcements",
            Some(&cookie),
            &form_body(&[
                ("title", "Pearl CTF"),
                ("description", "Registrations open soon"),
                ("scheduled_at", "tomorrow"),
            ]),
        ))
        .await?;
    let body = body_string(response).await?;

    assert!(body.contains("Please enter a valid schedule date and time"));
    assert!(body.contains(r#"value="Pearl CTF""#));
    assert!(body.contains(">Registrations open soon</textarea>"));
    assert!(body.contains(r#"value="tomorrow""#));

    Ok(())
}

#[tokio::test]
async fn rejected_resource_keeps_heading() -> anyhow::Result<()> {
    let (app, state, _) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;

    let response = app
        .oneshot(post_form(
            "/admin/resources",
            Some(&cookie),
            &form_body(&[
                ("heading", "Hack The Box"),
                ("description", "Retired boxes"),
                ("category", "Wargame"),
                ("link", ""),
            ]),
        ))
        .await?;
    let body = body_string(response).await?;

    assert!(body.contains("Heading, description, category and link are required"));
    assert!(body.contains(r#"value="Hack The Box""#));
    assert!(body.contains(r#"<option value="Wargame" selected>"#));
    assert!(!body.contains(r#"<option value="CTF" selected>"#));

    Ok(())
}

#[tokio::test]
async fn store_failure_in_admin_gate_renders_error_page() -> anyhow::Result<()> {
    let (app, state, pool) = test_app().await?;
    let cookie = admin_cookie(&state, "admin").await?;
    sqlx::query("DROP TABLE profiles").execute(&pool).await?;

    let response = app.oneshot(get_with_cookie("/admin", &cookie)).await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers()[header::CONTENT_TYPE].to_str()?.starts_with("text/html"));
    let body = body_string(response).await?;
    assert!(body.contains("The admin area is unavailable right now."));
    assert!(!body.contains(r#"{"error""#));

    Ok(())
}
