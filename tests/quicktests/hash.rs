use hash_bst::hash_bytes;

use quickcheck_macros::quickcheck;

#[quickcheck]
fn deterministic(bytes: Vec<u8>) -> bool {
    hash_bytes(&bytes) == hash_bytes(&bytes.clone())
}

#[quickcheck]
fn single_byte_lands_in_its_lane(prefix_len: u8, byte: u8) -> bool {
    let mut bytes = vec![0; usize::from(prefix_len)];
    bytes.push(byte);
    let shift = (usize::from(prefix_len) % 4) * 8;

    hash_bytes(&bytes) == (u32::from(byte) << shift) as i32
}

#[quickcheck]
fn xor_of_halves(a: Vec<u8>, b: Vec<u8>) -> bool {
    // Padding `a` to a multiple of four keeps `b`'s bytes in the same lanes.
    let mut a = a;
    while a.len() % 4 != 0 {
        a.push(0);
    }
    let mut joined = a.clone();
    joined.extend_from_slice(&b);

    hash_bytes(&joined) == hash_bytes(&a) ^ hash_bytes(&b)
}
