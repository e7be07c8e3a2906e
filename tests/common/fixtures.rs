//! Test fixtures - reusable settings content for tests.

/// Corporate settings: one catch-all mirror, one proxy, mirror credentials
pub const CORPORATE_SETTINGS: &str = r#"
[[mirrors]]
id = "corp-nexus"
url = "https://nexus.corp.example/repository/maven-public"
mirror_of = "external:*,!snapshots-local"

[[proxies]]
id = "corp-proxy"
host = "proxy.corp.example"
port = 3128
username = "proxy-user"
password = "{proxy-secret}"
non_proxy_hosts = "*.corp.example|localhost"

[[servers]]
id = "corp-nexus"
username = "deployer"
password = "{nexus-secret}"
file_permissions = "0644"
directory_permissions = "0755"

[servers.configuration]
name = "configuration"

[[servers.configuration.children]]
name = "wagonProvider"
value = "httpclient"

[[servers.configuration.children]]
name = "httpHeaders"

[[servers.configuration.children.children]]
name = "property"
value = "X-Build: ci"
"#;

/// Settings with no mirrors at all
pub const OPEN_SETTINGS: &str = r#"
[[proxies]]
host = "proxy.example.org"
"#;
