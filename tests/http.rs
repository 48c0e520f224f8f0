use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TodayResponse {
    date: String,
    hours: f64,
    goal: f64,
    progress: f64,
}

#[derive(Debug, Deserialize)]
struct BadgeView {
    days: u32,
}

#[derive(Debug, Deserialize)]
struct SubjectTotal {
    subject: String,
    hours: f64,
}

#[derive(Debug, Deserialize)]
struct DailyTotal {
    date: String,
    hours: f64,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    window: String,
    current_streak: u32,
    best_streak: u32,
    badges: Vec<BadgeView>,
    subject_totals: Vec<SubjectTotal>,
    daily_totals: Vec<DailyTotal>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "study_tracker_http_{}_{}.csv",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_study_tracker"))
        .env("PORT", port.to_string())
        .env("STUDY_LOG_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_today(client: &Client, base_url: &str) -> TodayResponse {
    client
        .get(format!("{base_url}/api/today"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_log_entry_updates_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_today(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/log", server.base_url))
        .json(&serde_json::json!({
            "subject": "Math",
            "hours": 1.5,
            "mood": "🙂 Good"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let today = fetch_today(&client, &server.base_url).await;
    assert!((today.hours - (before.hours + 1.5)).abs() < 1e-9);
    assert_eq!(today.goal, 4.0);
    assert!((0.0..=1.0).contains(&today.progress));
    assert!(!today.date.is_empty());
}

#[tokio::test]
async fn http_rejects_blank_subject() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_today(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/log", server.base_url))
        .json(&serde_json::json!({
            "subject": "   ",
            "hours": 1.0,
            "mood": "😃 Great"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let after = fetch_today(&client, &server.base_url).await;
    assert!((after.hours - before.hours).abs() < 1e-9);
}

#[tokio::test]
async fn http_rejects_sub_granular_hours() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for hours in [0.0, 0.25, 1.3] {
        let response = client
            .post(format!("{}/api/log", server.base_url))
            .json(&serde_json::json!({
                "subject": "Math",
                "hours": hours,
                "mood": "😐 Okay"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400, "hours = {hours}");
    }
}

#[tokio::test]
async fn http_stats_reflect_logged_subject() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/log", server.base_url))
        .json(&serde_json::json!({
            "subject": "Biology",
            "hours": 0.5,
            "mood": "😓 Tired"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let stats: StatsResponse = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(stats.window, "all");
    assert!(stats.current_streak >= 1);
    assert!(stats.best_streak >= stats.current_streak);
    assert!(stats.badges.iter().all(|badge| badge.days <= 30));
    let biology = stats
        .subject_totals
        .iter()
        .find(|total| total.subject == "Biology")
        .expect("missing subject total");
    assert!(biology.hours >= 0.5);
    assert!(!stats.daily_totals.is_empty());

    // Everything logged through this suite is dated today, so the week
    // window must still see it.
    let week: StatsResponse = client
        .get(format!("{}/api/stats?window=week", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(week.window, "week");
    assert!(week
        .subject_totals
        .iter()
        .any(|total| total.subject == "Biology"));
    assert!(week
        .daily_totals
        .iter()
        .any(|total| !total.date.is_empty() && total.hours > 0.0));
}

#[tokio::test]
async fn http_form_post_appends_and_redirects_home() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_today(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/log", server.base_url))
        .form(&[
            ("subject", "History"),
            ("hours", "0.5"),
            ("mood", "🙂 Good"),
        ])
        .send()
        .await
        .unwrap();

    // reqwest follows the redirect back to the dashboard page.
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("Study Habit Tracker"));

    let after = fetch_today(&client, &server.base_url).await;
    assert!((after.hours - (before.hours + 0.5)).abs() < 1e-9);
}
