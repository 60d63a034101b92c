//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative log lines.

/// Combined access log lines that parse cleanly.
pub const CORPUS_ACCESS: &[&str] = &[
    r#"192.168.40.80 - - [30/Aug/2030:11:27:18 +0800] "GET / HTTP/1.1" 200 3429 "-" "curl/7.61.1" "-""#,
    r#"10.0.0.7 - - [15/Jan/2024:10:00:01 +0000] "POST /api/v1/payments HTTP/1.1" 201 512 "https://shop.example/cart" "Mozilla/5.0" "-""#,
    r#"10.0.0.7 - - [15/Jan/2024:10:00:02 +0000] "GET /healthz HTTP/1.1" 502 - "-" "kube-probe/1.29" "-""#,
    r#"172.16.0.3 - - [15/Jan/2024:10:00:03 +0000] "HEAD /static/app.js HTTP/2.0" 304 0 "-" "wget" "-""#,
];

/// `/var/log/messages` lines that parse cleanly.
pub const CORPUS_SYSLOG: &[&str] = &[
    "Aug 30 18:08 myhost sshd[1234]: Accepted password for user from 192.168.1.2 port 22 ssh2",
    "Jan 15 10:00:02 web01 kernel: Out of memory: Killed process 4242 (java)",
    "Jan 15 10:00:03 web01 systemd[1]: Started Session 7 of user root.",
    "Jan 15 10:00:04 db01 CRON[998]: (root) CMD (run-parts /etc/cron.hourly)",
];

/// Lines neither parser accepts.
pub const CORPUS_MALFORMED: &[&str] = &[
    "",
    "garbage",
    "a b c d e",
    "2024-01-15 10:00:00 INFO  Starting application version 2.4.1",
];
