//! Prints one identifier per version together with its textual encodings.

fn main() -> Result<(), uuid014::ParseError> {
    let u0 = uuid014::uuid0();
    let u1 = uuid014::uuid1();
    let u4 = uuid014::uuid4();

    println!("uuid v0 sample : {} | {} | {}", u0, u0.base62(), u0.pretty());
    println!("uuid v1 sample : {} | {} | {}", u1, u1.base62(), u1.pretty());
    println!("uuid v4 sample : {} | {} | {}", u4, u4.base62(), u4.pretty());

    let rebuilt = uuid014::rebuild("F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6")?;
    println!("uuid v1 rebuilt: {} | {}", rebuilt, rebuilt.pretty());

    let from_base62 = uuid014::rebuild(&u4.base62())?;
    assert_eq!(from_base62, u4);

    Ok(())
}
