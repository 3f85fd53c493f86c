//! Example telegraf input blocks offered by the add dialog

/// A named example input definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleTemplate {
    pub name: &'static str,
    pub text: &'static str,
}

/// Example catalog; the first entry seeds a fresh add dialog
pub const EXAMPLE_TEMPLATES: &[ExampleTemplate] = &[
    ExampleTemplate {
        name: "HTTP response",
        text: r#"[[inputs.http_response]]
  ## Server address (default http://localhost)
  address = "https://www.rackspace.com"
  ## Set response_timeout (default 5 seconds)
  response_timeout = "5s"
  ## HTTP Request Method
  method = "GET"
  ## Whether to follow redirects from the server (defaults to false)
  follow_redirects = true"#,
    },
    ExampleTemplate {
        name: "Memory",
        text: "[[inputs.mem]]",
    },
    ExampleTemplate {
        name: "CPU",
        text: r#"[[inputs.cpu]]
  ## Whether to report per-cpu stats or not
  percpu = true
  ## Whether to report total system cpu stats or not
  totalcpu = true"#,
    },
    ExampleTemplate {
        name: "Disk",
        text: r#"[[inputs.disk]]
  ## Ignore mount points by filesystem type.
  ignore_fs = ["tmpfs", "devtmpfs", "devfs"]"#,
    },
    ExampleTemplate {
        name: "Ping",
        text: r#"[[inputs.ping]]
  ## List of urls to ping
  urls = ["www.rackspace.com"]
  ## number of pings to send per collection (ping -c <COUNT>)
  count = 3"#,
    },
    ExampleTemplate {
        name: "Net response",
        text: r#"[[inputs.net_response]]
  ## Protocol, must be "tcp" or "udp"
  protocol = "tcp"
  ## Server address (default localhost)
  address = "www.rackspace.com:443"
  ## Set timeout
  timeout = "1s""#,
    },
];

/// Look up an example by its display name
pub fn find_template(name: &str) -> Option<&'static ExampleTemplate> {
    EXAMPLE_TEMPLATES.iter().find(|t| t.name == name)
}
