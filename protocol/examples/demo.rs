//! Walk-through of the transaction lifecycle on a tiny DAG.
//!
//! Alice issues a genesis transaction, Alice and Bob each approve it, and a
//! final transaction merges both branches. Every record is verified, then a
//! forged copy is shown failing.
//!
//! Run with:
//!   cargo run --example demo

use tangle_protocol::crypto::TangleKeypair;
use tangle_protocol::transaction::{
    sign_transaction, verify_batch, Address, Digest, HashedTransaction, SignedTransaction,
    TransactionBuilder,
};

fn issue(
    sender: &TangleKeypair,
    to: &TangleKeypair,
    amount: u64,
    nonce: u64,
    parents: &[Digest],
) -> HashedTransaction {
    let unsigned = TransactionBuilder::new(Address::from(sender), Address::from(to))
        .amount(amount)
        .nonce(nonce)
        .parents(parents.iter().copied())
        .build();
    sign_transaction(unsigned, sender).into_hashed()
}

fn show(label: &str, tx: &HashedTransaction) {
    println!("{label:<8} {}", tx.hash());
    println!("         from    {}", tx.unsigned().from);
    println!("         amount  {}  nonce {}", tx.unsigned().amount, tx.unsigned().nonce);
    for parent in tx.parents() {
        println!("         parent  {}", parent);
    }
    println!("         bytes   {}", tx.signed().encoded_len());
}

fn main() {
    let alice = TangleKeypair::generate();
    let bob = TangleKeypair::generate();

    let genesis = issue(&alice, &bob, 100, 0, &[]);
    let left = issue(&alice, &bob, 10, 1, &[*genesis.hash()]);
    let right = issue(&bob, &alice, 5, 0, &[*genesis.hash()]);
    let merge = issue(&bob, &alice, 1, 1, &[*left.hash(), *right.hash()]);

    let named = [
        ("genesis", &genesis),
        ("left", &left),
        ("right", &right),
        ("merge", &merge),
    ];
    for (label, tx) in named {
        show(label, tx);
    }

    let dag = vec![genesis, left, right, merge.clone()];
    let accepted = verify_batch(&dag).iter().filter(|r| r.is_ok()).count();
    println!("\n{accepted}/{} transactions verified", dag.len());

    // Bump the amount but keep the original signature and hash.
    let (signed, hash) = merge.into_parts();
    let (mut unsigned, signature) = signed.into_parts();
    unsigned.amount = 1_000_000;
    let tampered = SignedTransaction::from_parts(unsigned, signature);
    let forged = HashedTransaction::from_parts(tampered, hash);

    match forged.verify() {
        Ok(()) => println!("forgery accepted (this should never happen)"),
        Err(e) => println!("forgery rejected: {e}"),
    }
}
