//! End-to-end lifecycle: deploy, list, claim, withdraw
//!
//! Mirrors the single-domain collection: max supply 1, "jack.eth" at 10 SOL.

use domain_registry::state::{DomainView, OverpaymentPolicy, RegistryInfo};
use solana_sdk::{pubkey::Pubkey, signer::Signer};

use crate::common::{
    accounts::{
        create_funded_keypair, seeded_registry, COLLECTION_NAME, COLLECTION_SYMBOL, DOMAIN_NAME,
        DOMAIN_PRICE, WALLET_FUNDING,
    },
    instructions::{
        build_claim_domain_ix, build_get_domain_ix, build_get_registry_info_ix, build_owner_of_ix,
        build_withdraw_ix,
    },
    setup::{derive_registry_pda, lamports, send, setup_litesvm, simulate_view},
};

#[test]
fn test_domain_lifecycle() {
    let mut svm = setup_litesvm();
    let deployer = seeded_registry(&mut svm, OverpaymentPolicy::Retain);
    let owner1 = create_funded_keypair(&mut svm, WALLET_FUNDING);
    let (registry_pda, _) = derive_registry_pda();

    // Deployment
    let info: RegistryInfo =
        simulate_view(&svm, build_get_registry_info_ix(&registry_pda), &owner1).unwrap();
    assert_eq!(info.name, COLLECTION_NAME);
    assert_eq!(info.symbol, COLLECTION_SYMBOL);
    assert_eq!(info.authority, deployer.pubkey());
    assert_eq!(info.max_supply, 1);
    assert_eq!(info.total_supply, 0);

    // Domain
    let domain: DomainView =
        simulate_view(&svm, build_get_domain_ix(&registry_pda, 1), &owner1).unwrap();
    assert_eq!(domain.name, DOMAIN_NAME);
    assert_eq!(domain.price, DOMAIN_PRICE);
    assert!(!domain.is_claimed);

    // Minting
    let ix = build_claim_domain_ix(&owner1.pubkey(), &registry_pda, 1, DOMAIN_PRICE);
    send(&mut svm, &[ix], &owner1, &[&owner1]).expect("Claim should succeed");

    let owner: Pubkey = simulate_view(&svm, build_owner_of_ix(&registry_pda, 1), &owner1).unwrap();
    assert_eq!(owner, owner1.pubkey());
    let domain: DomainView =
        simulate_view(&svm, build_get_domain_ix(&registry_pda, 1), &owner1).unwrap();
    assert!(domain.is_claimed);
    let info: RegistryInfo =
        simulate_view(&svm, build_get_registry_info_ix(&registry_pda), &owner1).unwrap();
    assert_eq!(info.balance, DOMAIN_PRICE);
    assert_eq!(info.total_supply, 1);

    // Withdrawing
    let balance_before = lamports(&svm, &deployer.pubkey());
    let ix = build_withdraw_ix(&deployer.pubkey(), &registry_pda);
    send(&mut svm, &[ix], &deployer, &[&deployer]).expect("Withdraw should succeed");

    assert!(lamports(&svm, &deployer.pubkey()) > balance_before);
    let info: RegistryInfo =
        simulate_view(&svm, build_get_registry_info_ix(&registry_pda), &owner1).unwrap();
    assert_eq!(info.balance, 0);
    // Ownership and supply survive the withdrawal
    assert_eq!(info.total_supply, 1);
}
