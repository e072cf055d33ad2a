use coursebook_core::password::{
    hash_password_blocking, hash_password_with_cost, verify_password, verify_password_blocking,
};

const COST: u32 = 4;

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let hash = hash_password_with_cost(password, COST).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_hash_password_empty() {
    assert!(hash_password_with_cost("", COST).is_ok());
}

#[test]
fn test_verify_password_correct() {
    let hash = hash_password_with_cost("correctpassword", COST).unwrap();

    assert!(verify_password("correctpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password_with_cost("correctpassword", COST).unwrap();

    assert!(!verify_password("wrongpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    assert!(verify_password("testpassword", "not_a_valid_bcrypt_hash").is_err());
}

#[test]
fn test_hash_generates_unique_hashes() {
    let hash1 = hash_password_with_cost("samepassword", COST).unwrap();
    let hash2 = hash_password_with_cost("samepassword", COST).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password("samepassword", &hash1).unwrap());
    assert!(verify_password("samepassword", &hash2).unwrap());
}

#[tokio::test]
async fn test_blocking_helpers_match_sync_ones() {
    let hash = hash_password_blocking("colon:in:password".to_string(), COST)
        .await
        .unwrap();

    assert!(verify_password("colon:in:password", &hash).unwrap());
    assert!(
        verify_password_blocking("colon:in:password".to_string(), hash)
            .await
            .unwrap()
    );
}
