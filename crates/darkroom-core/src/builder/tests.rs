use super::*;

const HOST: &str = "http://darkroom.io";
const SALT: &str = "test salt";
const URI: &str = "012ef7ed27c17ea9524f5f5fb3a86921";

fn factory() -> UrlBuilderFactory {
    UrlBuilderFactory::new(HOST, SALT).unwrap()
}

#[test]
fn factory_requires_hosts_and_salt() {
    assert!(matches!(
        UrlBuilderFactory::new(HOST, ""),
        Err(DarkroomError::Configuration(_))
    ));
    assert!(matches!(
        UrlBuilderFactory::new("", "asdf"),
        Err(DarkroomError::Configuration(_))
    ));
    assert!(matches!(
        UrlBuilderFactory::new(Vec::<String>::new(), "asdf"),
        Err(DarkroomError::Configuration(_))
    ));
    assert!(matches!(
        UrlBuilderFactory::new(Vec::<String>::new(), ""),
        Err(DarkroomError::Configuration(_))
    ));
}

#[test]
fn width_and_height_reject_nan() {
    let f = factory();
    let mut b = f.builder();
    assert!(matches!(
        b.width(f64::NAN),
        Err(DarkroomError::InvalidArgument { name: "width", .. })
    ));
    assert!(matches!(
        b.height(f64::NAN),
        Err(DarkroomError::InvalidArgument { name: "height", .. })
    ));
    assert!(b.width(3000).is_ok());
    assert!(b.height(3000).is_ok());
}

#[test]
fn rejected_dimension_leaves_state_unchanged() {
    let f = factory();
    let mut b = f.builder();
    b.resource(URI).width(100).unwrap();
    let before = b.url().unwrap();
    assert!(b.width(f64::NAN).is_err());
    assert!(b.height(f64::NAN).is_err());
    assert_eq!(b.url().unwrap(), before);
    assert_eq!(b.action(), Action::Width(100u32.into()));
}

#[test]
fn url_requires_resource() {
    let f = factory();
    let err = f.builder().url().unwrap_err();
    assert_eq!(err, DarkroomError::MissingResource);
    assert_eq!(err.to_string(), "cannot build a url without a valid resource");
    assert_eq!(f.builder().info().unwrap_err(), DarkroomError::MissingResource);
}

#[test]
fn full_transform_url() {
    let url = factory()
        .builder()
        .resource(URI)
        .width(100)
        .unwrap()
        .height(100)
        .unwrap()
        .mode("fit")
        .filename("jim.jpeg")
        .url()
        .unwrap();
    assert_eq!(
        url,
        "http://darkroom.io/100/100/fit/012ef7ed27c17ea9524f5f5fb3a86921:c77acd8bf955d117d12506e4ffa21e14/jim.jpeg"
    );
}

#[test]
fn mode_without_both_dimensions_is_ignored() {
    let f = factory();
    let mut b = f.builder();
    b.resource(URI).mode("fit");
    assert_eq!(b.action(), Action::Original);
    b.width(100).unwrap();
    assert_eq!(b.action(), Action::Width(100u32.into()));
}

#[test]
fn height_only_uses_zero_width() {
    let url = factory()
        .builder()
        .resource(URI)
        .height(100)
        .unwrap()
        .url()
        .unwrap();
    assert_eq!(
        url,
        "http://darkroom.io/0/100/012ef7ed27c17ea9524f5f5fb3a86921:a373d6e6bf1f7d0c0515492e4e355339"
    );
}

#[test]
fn info_ignores_transform_and_filename() {
    let url = factory()
        .builder()
        .resource(URI)
        .width(100)
        .unwrap()
        .filename("jim.jpeg")
        .format("webp")
        .info()
        .unwrap();
    assert_eq!(
        url,
        "http://darkroom.io/info/012ef7ed27c17ea9524f5f5fb3a86921:aab8c528ff377e25404d402f84cd370c"
    );
}

#[test]
fn builder_stays_usable_after_url() {
    let f = factory();
    let mut b = f.builder();
    b.resource(URI).width(100).unwrap().height(100).unwrap();
    for mode in ["fit", "cover", "stretch"] {
        let url = b.mode(mode).url().unwrap();
        assert!(
            url.starts_with(&format!("{HOST}/100/100/{mode}/{URI}:")),
            "{url}"
        );
    }
}

#[test]
fn format_suffix() {
    let url = factory()
        .builder()
        .resource(URI)
        .filename("jim.jpeg")
        .format("webp")
        .url()
        .unwrap();
    assert!(url.ends_with("/jim.jpeg.webp"), "{url}");
}

#[test]
fn hosts_rotate_round_robin() {
    let hosts = ["http://darkroom1.io", "http://darkroom2.io", "http://darkroom3.io"];
    let f = UrlBuilderFactory::new(hosts, SALT).unwrap();
    let bound: Vec<String> = (0..4).map(|_| f.builder().host().to_string()).collect();
    assert_eq!(bound, [hosts[0], hosts[1], hosts[2], hosts[0]]);
}

#[test]
fn debug_redacts_salt() {
    let f = factory();
    let b = f.builder();
    assert!(!format!("{f:?}").contains(SALT));
    assert!(!format!("{b:?}").contains(SALT));
}
