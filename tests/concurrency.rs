use std::str::FromStr;
use std::sync::Arc;

use inetnum::addr::Prefix;
use prefix_rib::rib::Rib;

mod common {
    use std::io::Write;

    pub fn init() {
        let _ = env_logger::builder()
            .format(|buf, record| writeln!(buf, "{}", record.args()))
            .is_test(true)
            .try_init();
    }
}

#[test]
fn test_concurrent_inserts() -> Result<(), Box<dyn std::error::Error>> {
    crate::common::init();

    struct WriterData {
        name: &'static str,
        pfxs: Vec<Prefix>,
    }

    let rib = Arc::new(Rib::new());

    let writer_1 = WriterData {
        name: "1",
        pfxs: vec![
            Prefix::from_str("185.34.0.0/16")?,
            Prefix::from_str("185.34.10.0/24")?,
            Prefix::from_str("185.34.11.0/24")?,
            Prefix::from_str("183.0.0.0/8")?,
        ],
    };

    let writer_2 = WriterData {
        name: "2",
        pfxs: vec![
            Prefix::from_str("185.34.0.0/16")?,
            Prefix::from_str("185.34.10.0/24")?,
            Prefix::from_str("185.34.12.0/24")?,
            Prefix::from_str("186.0.0.0/8")?,
        ],
    };

    let writer_3 = WriterData {
        name: "3",
        pfxs: vec![
            Prefix::from_str("185.36.0.0/16")?,
            Prefix::from_str("185.34.10.0/24")?,
            Prefix::from_str("185.34.12.0/24")?,
            Prefix::from_str("187.0.0.0/8")?,
        ],
    };

    let _: Vec<_> = vec![writer_1, writer_2, writer_3]
        .into_iter()
        .map(|data: WriterData| {
            let rib = rib.clone();

            std::thread::Builder::new()
                .name(data.name.to_string())
                .spawn(move || {
                    for pfx in data.pfxs {
                        rib.insert(&pfx);
                    }
                })
                .unwrap()
        })
        .map(|t| t.join())
        .collect();

    // the three sets overlap in some of their entries, and duplicate
    // inserts must not double-count
    let stats = rib.stats();
    assert_eq!(stats.v4.prefixes_count, 8);
    assert_eq!(stats.v6.prefixes_count, 0);

    assert_eq!(
        rib.longest_match(std::net::IpAddr::from_str("185.34.10.1")?),
        Some(Prefix::from_str("185.34.10.0/24")?)
    );
    assert_eq!(
        rib.longest_match(std::net::IpAddr::from_str("185.34.250.1")?),
        Some(Prefix::from_str("185.34.0.0/16")?)
    );
    assert_eq!(
        rib.longest_match(std::net::IpAddr::from_str("187.1.1.1")?),
        Some(Prefix::from_str("187.0.0.0/8")?)
    );
    assert_eq!(
        rib.longest_match(std::net::IpAddr::from_str("185.35.0.1")?),
        None
    );

    Ok(())
}

#[test]
fn test_readers_run_during_writes() -> Result<(), Box<dyn std::error::Error>> {
    crate::common::init();

    let rib = Arc::new(Rib::new());
    rib.insert(&Prefix::from_str("10.0.0.0/8")?);

    let writers: Vec<_> = (0..4u8)
        .map(|i| {
            let rib = rib.clone();
            std::thread::spawn(move || {
                for j in 0..=255u8 {
                    let pfx = Prefix::new(
                        std::net::Ipv4Addr::new(10, i, j, 0).into(),
                        24,
                    )
                    .unwrap();
                    rib.insert(&pfx);
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let rib = rib.clone();
            std::thread::spawn(move || {
                let addr = std::net::IpAddr::from_str("10.1.2.3").unwrap();
                for _ in 0..10_000 {
                    // the covering /8 never goes away, so every read sees
                    // either it or the more specific /24
                    let lpm = rib.longest_match(addr).unwrap();
                    assert!(lpm.len() == 8 || lpm.len() == 24);
                }
            })
        })
        .collect();

    for t in writers {
        t.join().unwrap();
    }
    for t in readers {
        t.join().unwrap();
    }

    assert_eq!(rib.stats().v4.prefixes_count, 1 + 4 * 256);
    assert_eq!(
        rib.longest_match(std::net::IpAddr::from_str("10.1.2.3")?),
        Some(Prefix::from_str("10.1.2.0/24")?)
    );

    Ok(())
}
