use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{SecretKey, Signature, XOnlyPublicKey, ecdh_nip04};
use sha2::{Digest, Sha256};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SecretKey::random(&mut rng);
    let pk = sk.public_key().expect("public key");

    // Nostr signs the SHA-256 event id, never the raw content.
    let event_id: [u8; 32] = Sha256::digest(b"hello nostr").into();
    let sig = sk.sign(&mut rng, &event_id).expect("sign");

    let pk_bytes = bincode::serialize(&pk).expect("serialize pk");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let pk2: XOnlyPublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");
    assert_eq!(pk2, pk);
    assert_eq!(sig2, sig);

    let peer = SecretKey::random(&mut rng);
    let peer_pk = peer.public_key().expect("peer public key");
    let ours = ecdh_nip04(&sk.to_bytes(), peer_pk.as_bytes()).expect("ecdh");
    let theirs = ecdh_nip04(&peer.to_bytes(), pk.as_bytes()).expect("ecdh");
    assert_eq!(ours, theirs);

    println!("pubkey:    {}", hex::encode(pk.to_bytes()));
    println!("event id:  {}", hex::encode(event_id));
    println!("signature: {}", hex::encode(sig.to_bytes()));
    println!("shared x:  {}", hex::encode(ours));
}
