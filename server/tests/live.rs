//! Full-page and fragment round trips against a server on a real socket.
//!
//! # Design
//! Starts the server on a random port in a background thread, then talks to
//! it over HTTP with ureq. Redirects are followed, so full-page posts end on
//! the rendered index.

fn spawn_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todomvc_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

#[test]
fn full_page_and_fragment_round_trip() {
    let addr = spawn_server();
    let base = format!("http://{addr}");
    let agent = agent();

    // Step 1: empty index.
    let mut resp = agent.get(&base).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body = resp.body_mut().read_to_string().unwrap();
    assert!(body.contains("<strong>0</strong> items left"));

    // Step 2: full-page add follows the redirect back to the index.
    let mut resp = agent
        .post(&base)
        .send_form([("title", "Buy milk")])
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body = resp.body_mut().read_to_string().unwrap();
    assert!(body.contains("<label>Buy milk</label>"));
    assert!(body.contains("<strong>1</strong> item left"));

    // Step 3: fragment add returns only the new item.
    let mut resp = agent
        .post(&base)
        .header("HX-Request", "true")
        .send_form([("title", "Walk dog")])
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers().get("hx-trigger").unwrap().to_str().unwrap(),
        "itemAdded"
    );
    let body = resp.body_mut().read_to_string().unwrap();
    assert!(body.starts_with("<li id=\"todo-2\">"));
    assert!(!body.contains("Buy milk"));

    // Step 4: counter fragment.
    let mut resp = agent
        .get(&format!("{base}/active-items-count"))
        .header("HX-Request", "true")
        .call()
        .unwrap();
    let body = resp.body_mut().read_to_string().unwrap();
    assert!(body.contains("<strong>2</strong> items left"));

    // Step 5: toggling an unknown id is a 404.
    let resp = agent
        .put(&format!("{base}/999/toggle"))
        .header("HX-Request", "true")
        .send_empty()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
