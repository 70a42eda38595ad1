//! End-to-end tests against the real router on a loopback listener.

use serde_json::{json, Value};
use server_core::{build_app, ServerDeps};

async fn spawn_server() -> String {
    let app = build_app(ServerDeps::in_memory());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn otp_round_trip_is_one_time() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();
    let phone = "+15550001234";

    let sent: Value = http
        .post(format!("{base}/api/auth/otp/send"))
        .json(&json!({ "phoneNumber": phone }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(sent["message"], "OTP sent successfully");
    let code = sent["mockOtp"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 4);

    let verify = |otp: String| {
        let http = http.clone();
        let url = format!("{base}/api/auth/otp/verify");
        async move {
            http.post(url)
                .json(&json!({ "phoneNumber": phone, "otp": otp }))
                .send()
                .await
                .unwrap()
        }
    };

    let resp = verify(code.clone()).await;
    assert_eq!(resp.status(), 200);
    let user: Value = resp.json().await.unwrap();
    assert_eq!(user["provider"], "PHONE");
    assert_eq!(user["role"], "CITIZEN");
    assert_eq!(user["karmaPoints"], 0);
    assert_eq!(user["name"], "Mobile User");

    // Same code a second time: the record was consumed.
    let resp = verify(code).await;
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["message"], "OTP expired or not requested");
}

#[tokio::test]
async fn otp_wrong_code_allows_retry_and_repeat_verify_is_idempotent() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();
    let phone = "+15550009999";

    let send = || async {
        let v: Value = http
            .post(format!("{base}/api/auth/otp/send"))
            .json(&json!({ "phoneNumber": phone }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        v["mockOtp"].as_str().unwrap().to_string()
    };

    let code = send().await;
    let wrong = if code == "1000" { "1001" } else { "1000" };

    let resp = http
        .post(format!("{base}/api/auth/otp/verify"))
        .json(&json!({ "phoneNumber": phone, "otp": wrong }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["message"], "Invalid OTP");

    // Record survived the mismatch; the right code still works.
    let resp = http
        .post(format!("{base}/api/auth/otp/verify"))
        .json(&json!({ "phoneNumber": phone, "otp": code, "name": "Ravi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let first: Value = resp.json().await.unwrap();
    assert_eq!(first["name"], "Ravi");

    // A later verification round lands on the same identity.
    let code = send().await;
    let second: Value = http
        .post(format!("{base}/api/auth/otp/verify"))
        .json(&json!({ "phoneNumber": phone, "otp": code }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["id"], first["id"]);
}

#[tokio::test]
async fn otp_send_requires_phone_number() {
    let base = spawn_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/auth/otp/send"))
        .json(&json!({ "phoneNumber": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["message"], "Phone number required");
}

#[tokio::test]
async fn signup_rejects_duplicates_and_login_never_leaks_the_digest() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();
    let body = json!({ "name": "Asha", "email": "asha@example.org", "password": "hunter2" });

    let resp = http
        .post(format!("{base}/api/auth/signup"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let user: Value = resp.json().await.unwrap();
    assert_eq!(user["provider"], "LOCAL");
    assert!(user.get("passwordHash").is_none());

    let resp = http
        .post(format!("{base}/api/auth/signup"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["message"], "User already exists");

    let resp = http
        .post(format!("{base}/api/auth/login"))
        .json(&json!({ "email": "asha@example.org", "password": "hunter2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let logged_in: Value = resp.json().await.unwrap();
    assert_eq!(logged_in["id"], user["id"]);
    assert!(logged_in.get("passwordHash").is_none());

    let resp = http
        .post(format!("{base}/api/auth/login"))
        .json(&json!({ "email": "asha@example.org", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["message"], "Invalid credentials");
}

#[tokio::test]
async fn oauth_links_provider_onto_existing_local_account() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();

    let signup: Value = http
        .post(format!("{base}/api/auth/signup"))
        .json(&json!({ "name": "Asha", "email": "asha@example.org", "password": "pw" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let resp = http
        .post(format!("{base}/api/auth/oauth"))
        .json(&json!({
            "provider": "GOOGLE",
            "email": "asha@example.org",
            "name": "Asha G",
            "providerId": "g-123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let linked: Value = resp.json().await.unwrap();
    assert_eq!(linked["id"], signup["id"]);
    assert_eq!(linked["provider"], "GOOGLE");

    // Unknown identity: a fresh citizen profile is created.
    let resp = http
        .post(format!("{base}/api/auth/oauth"))
        .json(&json!({
            "provider": "APPLE",
            "email": "new@example.org",
            "name": "New",
            "providerId": "a-9"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["role"], "CITIZEN");
}

#[tokio::test]
async fn guest_login_creates_a_guest_identity() {
    let base = spawn_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/auth/guest"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let guest: Value = resp.json().await.unwrap();
    assert_eq!(guest["provider"], "GUEST");
    assert!(guest["name"].as_str().unwrap().starts_with("Guest "));
    assert!(guest["email"].as_str().unwrap().ends_with("@sewa.local"));
}

#[tokio::test]
async fn reports_are_listed_newest_first() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();

    for category in ["Roads", "Water", "Waste"] {
        let resp = http
            .post(format!("{base}/api/reports"))
            .json(&json!({
                "category": category,
                "severity": "HIGH",
                "description": "broken"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let reports: Vec<Value> = http
        .get(format!("{base}/api/reports"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reports.len(), 3);
    let timestamps: Vec<i64> = reports
        .iter()
        .map(|r| r["timestamp"].as_i64().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);
    assert_eq!(reports[0]["status"], "PENDING");
}

#[tokio::test]
async fn applying_increments_the_job_applicant_count_by_one() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();

    let job: Value = http
        .post(format!("{base}/api/jobs"))
        .json(&json!({
            "title": "Outreach Coordinator",
            "company": "Green Earth Alliance",
            "location": "Mumbai, India",
            "type": "Full-time",
            "salaryRange": "30k-45k",
            "description": "Coordinate weekend drives",
            "requirements": ["Communication"],
            "postedBy": "employer1"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(job["applicantsCount"], 0);
    let job_id = job["id"].as_str().unwrap();

    let resp = http
        .post(format!("{base}/api/applications"))
        .json(&json!({
            "jobId": job_id,
            "applicantId": "u1",
            "applicantName": "Ravi"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let application: Value = resp.json().await.unwrap();
    assert_eq!(application["status"], "Applied");

    let jobs: Vec<Value> = http
        .get(format!("{base}/api/jobs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed = jobs.iter().find(|j| j["id"] == job["id"]).unwrap();
    assert_eq!(listed["applicantsCount"], 1);

    let applications: Vec<Value> = http
        .get(format!("{base}/api/jobs/{job_id}/applications"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(applications.len(), 1);

    // Pipeline moderation.
    let app_id = application["id"].as_str().unwrap();
    let updated: Value = http
        .patch(format!("{base}/api/applications/{app_id}/status"))
        .json(&json!({ "status": "Interview" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["status"], "Interview");
}

#[tokio::test]
async fn ngo_moderation_and_stats() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();

    let ngo: Value = http
        .post(format!("{base}/api/ngos"))
        .json(&json!({
            "name": "Future Scholars Foundation",
            "cause": "Education",
            "description": "Books and scholarships"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ngo["status"], "PENDING");

    // Pending NGOs are invisible publicly but queued for admins.
    let public: Vec<Value> = http
        .get(format!("{base}/api/ngos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(public.is_empty());
    let queue: Vec<Value> = http
        .get(format!("{base}/api/admin/ngos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(queue.len(), 1);

    let stats: Value = http
        .get(format!("{base}/api/admin/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["pendingNGOs"], 1);
    assert_eq!(stats["totalUsers"], 0);

    let id = ngo["id"].as_str().unwrap();
    let approved: Value = http
        .patch(format!("{base}/api/admin/ngos/{id}"))
        .json(&json!({ "status": "APPROVED" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(approved["status"], "APPROVED");

    let public: Vec<Value> = http
        .get(format!("{base}/api/ngos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(public.len(), 1);
}

#[tokio::test]
async fn health_banner() {
    let base = spawn_server().await;
    let body = reqwest::get(&base).await.unwrap().text().await.unwrap();
    assert_eq!(body, "SEWA Ecosystem Backend is Running");
}
