//! Definition file fixtures.

/// Two secrets with a disabled `dev` branch and a `qa` override.
pub const BASIC: &str = r#"
vault_secrets:
  - name: db_password
    default:
      vault:
        account_id: "1001"
        namespace: team/prod
    branch-overrides:
      - name: dev
        vault_enabled: false
      - name: qa
        vault:
          account_id: "2001"
          namespace: team/qa
  - name: api_key
    default:
      vault:
        account_id: "1002"
        namepsace: team/prod
    branch-overrides:
      - name: dev
        vault_enabled: false
"#;

/// Only fetched on `main`.
pub const MAIN_ONLY: &str = r#"
vault_secrets:
  - name: deploy_key
    branch-overrides:
      - name: main
        vault:
          account_id: "3001"
          namespace: team/release
"#;

/// Several independent problems in one document.
pub const BROKEN: &str = r#"
vault_secrets:
  - name: ""
    default:
      vault:
        account_id: "1"
        namespace: ns
  - name: partial
    default:
      vault:
        account_id: "1"
  - name: lonely
  - name: contradiction
    default:
      vault:
        account_id: "1"
        namespace: ns
    branch-overrides:
      - name: dev
        vault_enabled: false
        vault:
          account_id: "9"
          namespace: ns9
      - name: same
        vault:
          account_id: "1"
          namespace: ns
  - name: partial
    default:
      vault:
        account_id: "2"
        namespace: ns
"#;
