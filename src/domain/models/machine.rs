use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric machine identifier, assigned by the machine repository or
/// supplied by the caller. Immutable once assigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MachineId(pub u64);

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MachineId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A network interface: IP address plus prefix length.
///
/// Serialized in `ip/prefix` form, e.g. `10.10.10.99/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkInterface {
    pub ip: IpAddr,
    pub prefix_len: u8,
}

impl NetworkInterface {
    pub fn new(ip: IpAddr, prefix_len: u8) -> Self {
        Self { ip, prefix_len }
    }
}

impl fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ip, self.prefix_len)
    }
}

impl FromStr for NetworkInterface {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ip, prefix) = match s.split_once('/') {
            Some((ip, prefix)) => (ip, Some(prefix)),
            None => (s, None),
        };

        let ip: IpAddr = ip
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid interface address {s}: {e}"))?;
        let max_prefix = if ip.is_ipv4() { 32 } else { 128 };
        let prefix_len = match prefix {
            Some(p) => {
                let p: u8 = p
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid prefix length in {s}: {e}"))?;
                if p > max_prefix {
                    anyhow::bail!("Prefix length {p} out of range for {ip}");
                }
                p
            }
            // A bare address is a host route
            None => max_prefix,
        };

        Ok(Self { ip, prefix_len })
    }
}

impl Serialize for NetworkInterface {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkInterface {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Machine entity representing a physical or virtual host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Repository-assigned or caller-supplied identifier.
    pub id: MachineId,

    /// Hardware identifier of the host, if known.
    pub hardware_id: Option<u64>,

    /// Network interfaces, in discovery order.
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
}

impl Machine {
    pub fn new(id: MachineId) -> Self {
        Self {
            id,
            hardware_id: None,
            network_interfaces: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_parses_ip_and_prefix() {
        let iface: NetworkInterface = "10.10.10.99/24".parse().unwrap();
        assert_eq!(iface.ip, "10.10.10.99".parse::<IpAddr>().unwrap());
        assert_eq!(iface.prefix_len, 24);
        assert_eq!(iface.to_string(), "10.10.10.99/24");
    }

    #[test]
    fn bare_address_is_host_route() {
        let v4: NetworkInterface = "192.168.1.1".parse().unwrap();
        assert_eq!(v4.prefix_len, 32);

        let v6: NetworkInterface = "fe80::1".parse().unwrap();
        assert_eq!(v6.prefix_len, 128);
    }

    #[test]
    fn out_of_range_prefix_rejected() {
        assert!("10.0.0.1/33".parse::<NetworkInterface>().is_err());
        assert!("not-an-ip/24".parse::<NetworkInterface>().is_err());
    }

    #[test]
    fn machine_equality_is_structural() {
        let iface: NetworkInterface = "10.10.10.99/32".parse().unwrap();
        let a = Machine {
            id: MachineId(1),
            hardware_id: Some(5),
            network_interfaces: vec![iface],
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.hardware_id = Some(6);
        assert_ne!(a, b);
    }
}
