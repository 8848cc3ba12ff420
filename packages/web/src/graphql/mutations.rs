//! GraphQL mutation definitions

// ============================================================================
// AUTHENTICATION MUTATIONS
// ============================================================================

pub const LOG_IN: &str = r#"
  mutation LogIn($input: LogInInput) {
    logIn(input: $input) {
      id
      token
      avatar
      hasWallet
      didRequest
    }
  }
"#;

pub const LOG_OUT: &str = r#"
  mutation LogOut {
    logOut {
      id
      token
      avatar
      hasWallet
      didRequest
    }
  }
"#;

// ============================================================================
// STRIPE MUTATIONS
// ============================================================================

pub const CONNECT_STRIPE: &str = r#"
  mutation ConnectStripe($input: ConnectStripeInput!) {
    connectStripe(input: $input) {
      hasWallet
    }
  }
"#;

// ============================================================================
// LISTING MUTATIONS
// ============================================================================

pub const HOST_LISTING: &str = r#"
  mutation HostListing($input: HostListingInput!) {
    hostListing(input: $input) {
      id
    }
  }
"#;
