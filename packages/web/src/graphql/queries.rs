//! GraphQL query definitions

// ============================================================================
// AUTHENTICATION QUERIES
// ============================================================================

pub const AUTH_URL: &str = r#"
  query AuthUrl {
    authUrl
  }
"#;

// ============================================================================
// LISTING QUERIES
// ============================================================================

pub const LISTING: &str = r#"
  query Listing($id: ID!) {
    listing(id: $id) {
      id
      title
      description
      image
      host {
        id
        name
        avatar
        hasWallet
      }
      type
      address
      city
      price
      numOfGuests
    }
  }
"#;

pub const LISTINGS: &str = r#"
  query Listings($location: String, $filter: ListingsFilter!, $limit: Int!, $page: Int!) {
    listings(location: $location, filter: $filter, limit: $limit, page: $page) {
      region
      total
      result {
        id
        title
        image
        address
        price
        numOfGuests
      }
    }
  }
"#;

// ============================================================================
// USER QUERIES
// ============================================================================

pub const USER: &str = r#"
  query User($id: ID!, $listingsPage: Int!, $limit: Int!) {
    user(id: $id) {
      id
      name
      avatar
      contact
      hasWallet
      income
      listings(page: $listingsPage, limit: $limit) {
        total
        result {
          id
          title
          image
          address
          price
          numOfGuests
        }
      }
    }
  }
"#;
