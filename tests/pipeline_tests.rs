//! Integration tests for the request/response pipeline.
//!
//! These run against a scripted in-memory transport, so no network access
//! or credentials are needed. The transport records every prepared request
//! and serves canned responses in small chunks to exercise partial reads.
//!
//! Run with: cargo test --test pipeline_tests

use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::{Arc, Mutex, Once};

use tracing_subscriber::EnvFilter;

use tweetlite_rs::auth::ExposeSecret;
use tweetlite_rs::client::{PreparedRequest, TransportResponse, FORM_CONTENT_TYPE};
use tweetlite_rs::models::Method;
use tweetlite_rs::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

// =============================================================================
// Scripted transport
// =============================================================================

/// Reader that hands out at most `chunk` bytes per call.
struct Chunked {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
}

impl Read for Chunked {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

struct Canned {
    status: u16,
    body: Vec<u8>,
    declared: Option<u64>,
}

#[derive(Default)]
struct Script {
    responses: VecDeque<Canned>,
    requests: Vec<PreparedRequest>,
}

#[derive(Clone, Default)]
struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    /// Queue a response whose declared length matches its body.
    fn respond(&self, status: u16, body: &str) -> &Self {
        self.respond_declaring(status, body, Some(body.len() as u64))
    }

    fn respond_declaring(&self, status: u16, body: &str, declared: Option<u64>) -> &Self {
        self.respond_bytes(status, body.as_bytes(), declared)
    }

    fn respond_bytes(&self, status: u16, body: &[u8], declared: Option<u64>) -> &Self {
        self.script.lock().unwrap().responses.push_back(Canned {
            status,
            body: body.to_vec(),
            declared,
        });
        self
    }

    fn requests(&self) -> Vec<PreparedRequest> {
        self.script.lock().unwrap().requests.clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &PreparedRequest) -> tweetlite_rs::Result<TransportResponse> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(request.clone());
        let canned = script
            .responses
            .pop_front()
            .ok_or_else(|| Error::Transport("no scripted response left".to_string()))?;

        Ok(TransportResponse {
            status: canned.status,
            content_length: canned.declared,
            body: Box::new(Chunked {
                data: canned.body,
                pos: 0,
                chunk: 7,
            }),
        })
    }
}

/// Signer that records what it was asked to sign.
#[derive(Clone, Default)]
struct RecordingSigner {
    calls: Arc<Mutex<Vec<(Method, String, Vec<QueryParameter>)>>>,
}

impl Signer for RecordingSigner {
    fn sign(
        &self,
        method: Method,
        uri: &str,
        consumer: &ConsumerCredentials,
        access: &AccessCredentials,
        params: &[QueryParameter],
    ) -> tweetlite_rs::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((method, uri.to_string(), params.to_vec()));
        OAuth1Signer::new().sign(method, uri, consumer, access, params)
    }
}

const BASE: &str = "https://api.example.com/1.1";

fn create_client(transport: &ScriptedTransport) -> TwitterClient {
    create_client_with(transport, ClientConfig::default())
}

fn create_client_with(transport: &ScriptedTransport, config: ClientConfig) -> TwitterClient {
    init_logging();
    TwitterClient::builder(
        ConsumerCredentials::new("consumer-key", "consumer-secret"),
        AccessCredentials::new("access-token", "access-secret"),
    )
    .config(config.with_base_url(BASE))
    .transport(transport.clone())
    .build()
    .expect("client should build")
}

const USER_JSON: &str = r#"{
    "id": 6253282,
    "name": "Twitter API",
    "screen_name": "TwitterAPI",
    "followers_count": 6133636,
    "created_at": "Wed May 23 06:01:13 +0000 2007",
    "entities": {"url": {"urls": [{"expanded_url": "https://developer.twitter.com"}]}}
}"#;

// =============================================================================
// Statuses
// =============================================================================

mod statuses_tests {
    use super::*;

    #[test]
    fn test_update_posts_form_body() {
        let transport = ScriptedTransport::default();
        transport.respond(200, r#"{"id":42,"text":"hello"}"#);
        let client = create_client(&transport);

        let tweet = client
            .statuses()
            .update(&StatusUpdate::new("hello"))
            .expect("update should succeed");

        assert_eq!(tweet.id, TweetId::new(42));
        assert_eq!(tweet.text, "hello");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, format!("{}/statuses/update.json", BASE));
        assert_eq!(request.body.as_deref(), Some(&b"status=hello"[..]));
        assert_eq!(request.header("content-type"), Some(FORM_CONTENT_TYPE));
        assert_eq!(request.header("content-length"), Some("12"));
        assert!(request
            .header("authorization")
            .is_some_and(|auth| auth.starts_with("OAuth ")));
    }

    #[test]
    fn test_update_encodes_reply_and_reserved_characters() {
        let transport = ScriptedTransport::default();
        transport.respond(200, r#"{"id":43,"text":"a&b c","in_reply_to_status_id":42}"#);
        let client = create_client(&transport);

        let tweet = client
            .statuses()
            .update(&StatusUpdate::new("a&b c").in_reply_to(TweetId::new(42)))
            .unwrap();
        assert_eq!(tweet.in_reply_to_status_id, Some(TweetId::new(42)));

        let body = transport.requests()[0].body.clone().unwrap();
        let body = String::from_utf8(body).unwrap();
        assert_eq!(body, "status=a%26b%20c&in_reply_to_status_id=42");
        assert_eq!(
            transport.requests()[0].header("content-length"),
            Some(body.len().to_string().as_str())
        );
    }

    #[test]
    fn test_update_rejects_empty_status_without_sending() {
        let transport = ScriptedTransport::default();
        let client = create_client(&transport);

        let err = client.statuses().update(&StatusUpdate::new("  ")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_home_timeline_sends_only_given_params() {
        let transport = ScriptedTransport::default();
        transport.respond(200, r#"[{"id":3,"text":"c"},{"id":2,"text":"b"},{"id":1,"text":"a"}]"#);
        let client = create_client(&transport);

        let tweets = client
            .statuses()
            .home_timeline(&TimelineParams::new().count(5))
            .unwrap();

        let ids: Vec<u64> = tweets.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, format!("{}/statuses/home_timeline.json?count=5", BASE));
        assert!(request.body.is_none());
        assert!(request.header("content-type").is_none());
    }

    #[test]
    fn test_home_timeline_empty_array() {
        let transport = ScriptedTransport::default();
        transport.respond(200, "[]");
        let client = create_client(&transport);

        let tweets = client.statuses().home_timeline(&TimelineParams::new()).unwrap();
        assert!(tweets.is_empty());
        assert_eq!(
            transport.requests()[0].url,
            format!("{}/statuses/home_timeline.json", BASE)
        );
    }

    #[test]
    fn test_timeline_rejects_non_array() {
        let transport = ScriptedTransport::default();
        transport.respond(200, r#"{"id":1}"#);
        let client = create_client(&transport);

        let err = client.statuses().home_timeline(&TimelineParams::new()).unwrap_err();
        assert!(matches!(err, Error::MalformedEntity(_)));
    }

    #[test]
    fn test_user_timeline_by_screen_name() {
        let transport = ScriptedTransport::default();
        transport.respond(200, r#"[{"id":10,"text":"x","user":{"id":7,"screen_name":"jack"}}]"#);
        let client = create_client(&transport);

        let tweets = client
            .statuses()
            .user_timeline("@jack", &TimelineParams::new().max_id(TweetId::new(11)))
            .unwrap();

        assert_eq!(tweets[0].author().map(|u| u.id), Some(UserId::new(7)));
        assert_eq!(
            transport.requests()[0].url,
            format!("{}/statuses/user_timeline.json?screen_name=jack&max_id=11", BASE)
        );
    }

    #[test]
    fn test_show_tweet() {
        let transport = ScriptedTransport::default();
        transport.respond(
            200,
            r#"{"id":850006245121695744,"text":"1/ Today we're sharing","created_at":"Thu Apr 06 15:24:15 +0000 2017"}"#,
        );
        let client = create_client(&transport);

        let tweet = client.statuses().show(TweetId::new(850006245121695744)).unwrap();
        assert_eq!(tweet.created_at.timestamp(), 1491492255);
        assert_eq!(
            transport.requests()[0].url,
            format!("{}/statuses/show.json?id=850006245121695744", BASE)
        );
    }
}

// =============================================================================
// Users and account
// =============================================================================

mod users_tests {
    use super::*;

    #[test]
    fn test_verify_credentials() {
        let transport = ScriptedTransport::default();
        transport.respond(200, USER_JSON);
        let client = create_client(&transport);

        let me = client.account().verify_credentials().unwrap();
        assert_eq!(me.id, UserId::new(6253282));
        assert_eq!(me.screen_name, "TwitterAPI");
        assert_eq!(me.url, "https://developer.twitter.com");
        assert_eq!(me.followers_count, 6133636);
        assert_eq!(
            transport.requests()[0].url,
            format!("{}/account/verify_credentials.json", BASE)
        );
    }

    #[test]
    fn test_show_by_id_and_name() {
        let transport = ScriptedTransport::default();
        transport.respond(200, USER_JSON).respond(200, USER_JSON);
        let client = create_client(&transport);

        let by_id = client.users().show(UserId::new(6253282)).unwrap();
        let by_name = client.users().show("TwitterAPI").unwrap();
        assert_eq!(by_id, by_name);

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                format!("{}/users/show.json?user_id=6253282", BASE),
                format!("{}/users/show.json?screen_name=TwitterAPI", BASE),
            ]
        );
    }

    #[test]
    fn test_not_found_keeps_literal_body() {
        let transport = ScriptedTransport::default();
        let body = r#"{"errors":[{"code":50,"message":"User not found."}]}"#;
        transport.respond(404, body);
        let client = create_client(&transport);

        let err = client.users().show("nobody_by_this_name").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.body(), Some(body));
    }

    #[test]
    fn test_error_body_with_invalid_utf8() {
        let transport = ScriptedTransport::default();
        transport.respond_bytes(503, b"Over \xffcapacity", Some(14));
        let client = create_client(&transport);

        let err = client.users().show("jack").unwrap_err();
        assert!(err.is_server_error());
        assert_eq!(err.body(), Some("Over \u{fffd}capacity"));
    }

    #[test]
    fn test_unauthorized_non_json_body() {
        let transport = ScriptedTransport::default();
        transport.respond(401, "Authorization Required");
        let client = create_client(&transport);

        match client.account().verify_credentials() {
            Err(Error::Api { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "Authorization Required");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_user_missing_id() {
        let transport = ScriptedTransport::default();
        transport.respond(200, r#"{"screen_name":"noid"}"#);
        let client = create_client(&transport);

        let err = client.account().verify_credentials().unwrap_err();
        assert!(matches!(err, Error::MalformedEntity(_)));
    }
}

// =============================================================================
// Signing
// =============================================================================

mod signing_tests {
    use super::*;

    fn client_with_signer(transport: &ScriptedTransport, signer: &RecordingSigner) -> TwitterClient {
        init_logging();
        TwitterClient::builder(
            ConsumerCredentials::new("consumer-key", "consumer-secret"),
            AccessCredentials::new("access-token", "access-secret"),
        )
        .config(ClientConfig::default().with_base_url(BASE))
        .transport(transport.clone())
        .signer(signer.clone())
        .build()
        .unwrap()
    }

    #[test]
    fn test_signer_sees_base_uri_and_raw_params() {
        let transport = ScriptedTransport::default();
        transport
            .respond(200, "[]")
            .respond(200, r#"{"id":1,"text":"a b"}"#);
        let signer = RecordingSigner::default();
        let client = client_with_signer(&transport, &signer);

        client
            .statuses()
            .home_timeline(&TimelineParams::new().count(2).since_id(TweetId::new(9)))
            .unwrap();
        client.statuses().update(&StatusUpdate::new("a b")).unwrap();

        let calls = signer.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);

        let (method, uri, params) = &calls[0];
        assert_eq!(*method, Method::Get);
        assert_eq!(uri, &format!("{}/statuses/home_timeline.json", BASE));
        assert_eq!(
            params,
            &vec![
                QueryParameter::new("count", "2"),
                QueryParameter::new("since_id", "9"),
            ]
        );

        let (method, uri, params) = &calls[1];
        assert_eq!(*method, Method::Post);
        assert_eq!(uri, &format!("{}/statuses/update.json", BASE));
        assert_eq!(params, &vec![QueryParameter::new("status", "a b")]);
    }

    #[test]
    fn test_standalone_signer_reads_both_secrets() {
        /// OAuth PLAINTEXT signing, built only from the public credential API.
        struct Plaintext;

        impl Signer for Plaintext {
            fn sign(
                &self,
                _: Method,
                _: &str,
                consumer: &ConsumerCredentials,
                access: &AccessCredentials,
                _: &[QueryParameter],
            ) -> tweetlite_rs::Result<String> {
                Ok(format!(
                    "OAuth oauth_consumer_key=\"{}\", oauth_token=\"{}\", \
                     oauth_signature_method=\"PLAINTEXT\", oauth_signature=\"{}%26{}\"",
                    consumer.key(),
                    access.token(),
                    consumer.secret().expose_secret(),
                    access.secret().expose_secret(),
                ))
            }
        }

        let transport = ScriptedTransport::default();
        transport.respond(200, r#"{"id":1}"#);
        let client = TwitterClient::builder(
            ConsumerCredentials::new("ck", "consumer-secret"),
            AccessCredentials::new("at", "access-secret"),
        )
        .config(ClientConfig::default().with_base_url(BASE))
        .transport(transport.clone())
        .signer(Plaintext)
        .build()
        .unwrap();

        client.account().verify_credentials().unwrap();

        let auth = transport.requests()[0]
            .header("authorization")
            .map(str::to_string)
            .unwrap_or_default();
        assert!(auth.contains("oauth_signature_method=\"PLAINTEXT\""));
        assert!(auth.ends_with("oauth_signature=\"consumer-secret%26access-secret\""));
    }

    #[test]
    fn test_signing_failure_skips_transport() {
        struct Failing;

        impl Signer for Failing {
            fn sign(
                &self,
                _: Method,
                _: &str,
                _: &ConsumerCredentials,
                _: &AccessCredentials,
                _: &[QueryParameter],
            ) -> tweetlite_rs::Result<String> {
                Err(Error::Signing("no key".to_string()))
            }
        }

        let transport = ScriptedTransport::default();
        transport.respond(200, "{}");
        let client = TwitterClient::builder(
            ConsumerCredentials::new("ck", "cs"),
            AccessCredentials::new("at", "as"),
        )
        .config(ClientConfig::default().with_base_url(BASE))
        .transport(transport.clone())
        .signer(Failing)
        .build()
        .unwrap();

        let err = client.account().verify_credentials().unwrap_err();
        assert!(matches!(err, Error::Signing(_)));
        assert!(transport.requests().is_empty());
    }
}

// =============================================================================
// Entity follow-on calls
// =============================================================================

mod entity_tests {
    use super::*;

    #[test]
    fn test_user_timeline_follow_on() {
        let transport = ScriptedTransport::default();
        transport
            .respond(200, USER_JSON)
            .respond(200, r#"[{"id":5,"text":"from the user"}]"#);
        let client = create_client(&transport);

        let user = client.users().show("TwitterAPI").unwrap();
        let tweets = user.timeline(&TimelineParams::new().count(1)).unwrap();

        assert_eq!(tweets.len(), 1);
        assert_eq!(tweets[0].client(), user.client());
        assert_eq!(
            transport.requests()[1].url,
            format!("{}/statuses/user_timeline.json?user_id=6253282&count=1", BASE)
        );
    }

    #[test]
    fn test_reply_threads_to_author() {
        let transport = ScriptedTransport::default();
        transport
            .respond(200, r#"{"id":100,"text":"original","user":{"id":7,"screen_name":"jack"}}"#)
            .respond(200, r#"{"id":101,"text":"@jack thanks","in_reply_to_status_id":100}"#);
        let client = create_client(&transport);

        let original = client.statuses().show(TweetId::new(100)).unwrap();
        let reply = original.reply("thanks").unwrap();

        assert_eq!(reply.in_reply_to_status_id, Some(TweetId::new(100)));
        let body = String::from_utf8(transport.requests()[1].body.clone().unwrap()).unwrap();
        assert_eq!(body, "status=%40jack%20thanks&in_reply_to_status_id=100");
    }

    #[test]
    fn test_follow_on_after_client_dropped() {
        let transport = ScriptedTransport::default();
        transport.respond(200, USER_JSON).respond(200, "[]");
        let client = create_client(&transport);

        let user = client.users().show("TwitterAPI").unwrap();
        assert!(user.client().is_alive());
        drop(client);

        assert!(!user.client().is_alive());
        let err = user.timeline(&TimelineParams::new()).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(transport.requests().len(), 1);
    }
}

// =============================================================================
// Response reading
// =============================================================================

mod reader_tests {
    use super::*;

    #[test]
    fn test_chunked_body_is_fully_assembled() {
        let transport = ScriptedTransport::default();
        let long_text = "x".repeat(500);
        transport.respond(200, &format!(r#"{{"id":1,"text":"{}"}}"#, long_text));
        let client = create_client(&transport);

        let tweet = client.statuses().show(TweetId::new(1)).unwrap();
        assert_eq!(tweet.text, long_text);
    }

    #[test]
    fn test_short_read_accepted_by_default() {
        let transport = ScriptedTransport::default();
        let body = r#"{"id":1,"text":"short"}"#;
        transport.respond_declaring(200, body, Some(body.len() as u64 + 40));
        let client = create_client(&transport);

        let tweet = client.statuses().show(TweetId::new(1)).unwrap();
        assert_eq!(tweet.text, "short");
    }

    #[test]
    fn test_short_read_rejected_in_strict_mode() {
        let transport = ScriptedTransport::default();
        let body = r#"{"id":1,"text":"short"}"#;
        transport.respond_declaring(200, body, Some(body.len() as u64 + 40));
        let client = create_client_with(
            &transport,
            ClientConfig::default().with_strict_content_length(true),
        );

        let err = client.statuses().show(TweetId::new(1)).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_undeclared_length_reads_to_end() {
        let transport = ScriptedTransport::default();
        transport.respond_declaring(200, r#"{"id":1,"text":"no length"}"#, None);
        let client = create_client(&transport);

        let tweet = client.statuses().show(TweetId::new(1)).unwrap();
        assert_eq!(tweet.text, "no length");
    }

    #[test]
    fn test_body_over_limit_rejected() {
        let transport = ScriptedTransport::default();
        transport.respond_declaring(200, &"x".repeat(64), None);
        let client = create_client_with(&transport, ClientConfig::default().with_max_body_bytes(32));

        let err = client.statuses().show(TweetId::new(1)).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_invalid_json_on_success() {
        let transport = ScriptedTransport::default();
        transport.respond(200, "<html>oops</html>");
        let client = create_client(&transport);

        let err = client.statuses().show(TweetId::new(1)).unwrap_err();
        assert!(matches!(err, Error::MalformedEntity(_)));
    }
}
