//! Integration tests: URLs from the public builder API, parsed back with a
//! real URL parser, and host rotation under concurrent use.

use std::collections::HashMap;
use std::thread;

use darkroom_core::hash::{action_hash, HASH_LEN};
use darkroom_core::url_model::construct_url;
use darkroom_core::{Action, UrlBuilderFactory};
use url::Url;

const SALT: &str = "test salt";
const URI: &str = "012ef7ed27c17ea9524f5f5fb3a86921";

/// Split the last path segments of a parsed darkroom URL into
/// `(resource, hash, filename)`.
fn signed_segment(url: &Url, action_len: usize) -> (String, String, Option<String>) {
    let segments: Vec<&str> = url.path_segments().unwrap().collect();
    let (resource, hash) = segments[action_len].split_once(':').unwrap();
    let filename = segments.get(action_len + 1).map(|s| s.to_string());
    (resource.to_string(), hash.to_string(), filename)
}

#[test]
fn constructed_urls_parse_with_expected_shape() {
    let actions: [&[&str]; 2] = [&["original"], &["100", "200"]];
    for action in actions {
        let raw = construct_url("http://darkroom.io", SALT, action, URI, Some("jim.jpeg"), None);
        let parsed = Url::parse(&raw).unwrap();
        assert_eq!(parsed.scheme(), "http");
        assert_eq!(parsed.host_str(), Some("darkroom.io"));

        let prefix = format!("/{}/{URI}", action.join("/"));
        assert!(parsed.path().starts_with(&prefix), "{}", parsed.path());

        let (resource, hash, filename) = signed_segment(&parsed, action.len());
        assert_eq!(resource, URI);
        assert_eq!(hash, action_hash(SALT, action, URI));
        assert_eq!(filename.as_deref(), Some("jim.jpeg"));
    }
}

#[test]
fn builder_urls_verify_like_the_service_would() {
    let factory = UrlBuilderFactory::new("https://img.example.com:8443", SALT).unwrap();
    let mut builder = factory.builder();
    builder
        .resource(URI)
        .width(640)
        .unwrap()
        .height(480)
        .unwrap()
        .mode("cover")
        .filename("Summer Holiday/beach.PNG");

    let parsed = Url::parse(&builder.url().unwrap()).unwrap();
    assert_eq!(parsed.port(), Some(8443));

    let segments: Vec<&str> = parsed.path_segments().unwrap().collect();
    assert_eq!(&segments[..3], ["640", "480", "cover"]);

    let (resource, hash, filename) = signed_segment(&parsed, 3);
    assert_eq!(hash.len(), HASH_LEN);
    // Recompute from the path alone, as the receiving service does.
    assert_eq!(hash, action_hash(SALT, &segments[..3], &resource));
    assert_eq!(hash, builder.action().hash(SALT, URI));
    assert_eq!(filename.as_deref(), Some("summer-holiday-beach.PNG"));
}

#[test]
fn url_without_dimensions_points_to_original() {
    let factory = UrlBuilderFactory::new("http://darkroom.io", SALT).unwrap();
    let raw = factory.builder().resource(URI).url().unwrap();
    let parsed = Url::parse(&raw).unwrap();
    assert!(parsed.path().starts_with(&format!("/original/{URI}:")));
    assert_eq!(factory.builder().resource(URI).action(), Action::Original);
}

#[test]
fn rotation_wraps_back_to_first_host() {
    let hosts = vec![
        "http://darkroom1.io".to_string(),
        "http://darkroom2.io".to_string(),
        "http://darkroom3.io".to_string(),
    ];
    let factory = UrlBuilderFactory::new(hosts.clone(), SALT).unwrap();

    for host in hosts.iter().chain(hosts.iter().take(1)) {
        let url = factory
            .builder()
            .resource(URI)
            .height(100)
            .unwrap()
            .width(100)
            .unwrap()
            .filename("jim.jpeg")
            .url()
            .unwrap();
        assert!(url.starts_with(host.as_str()), "{url} should start with {host}");
    }
}

#[test]
fn concurrent_builders_share_hosts_evenly() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 300;

    let hosts = ["http://a.io", "http://b.io", "http://c.io"];
    let factory = UrlBuilderFactory::new(hosts, SALT).unwrap();

    let bound: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| factory.builder().host().to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let mut counts: HashMap<String, usize> = HashMap::new();
    for host in bound {
        *counts.entry(host).or_default() += 1;
    }
    let expected = THREADS * PER_THREAD / hosts.len();
    for host in hosts {
        assert_eq!(counts.get(host), Some(&expected), "{host}");
    }
}
