//! `mpp endpoints`: the registry as a table.

use std::fmt::Write;

use mpp_schema::EndpointDescriptor;

/// One line per endpoint: name, method, facade, auth, path.
pub fn render_table(endpoints: &[&EndpointDescriptor]) -> String {
    let width = endpoints.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for endpoint in endpoints {
        let auth = if endpoint.authenticated { "bearer" } else { "-" };
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:<width$}  {:<4}  {:<6}  {:<6}  {}",
            endpoint.name,
            endpoint.method.as_str(),
            endpoint.facade.as_str(),
            auth,
            endpoint.path,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpp_schema::registry::{self, ENDPOINTS};

    #[test]
    fn one_line_per_endpoint() {
        let table = render_table(ENDPOINTS);
        assert_eq!(table.lines().count(), ENDPOINTS.len());
    }

    #[test]
    fn columns_line_up() {
        let login = registry::find("login").unwrap();
        let history = registry::find("invest_profile_history").unwrap();
        let table = render_table(&[login, history]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[0],
            "login                   POST  sso     -       auth/realms/mpp-prod/protocol/openid-connect/token"
        );
        assert!(lines[1].starts_with("invest_profile_history  POST  public  -  "));
    }
}
