use std::fmt;
use std::future::{ready, Ready};
use std::net::IpAddr;
use std::str::FromStr;

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use ipnetwork::IpNetwork;

pub const DEFAULT_TRUSTED_PROXIES: &[&str] =
    &["127.0.0.1", "10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];

/// Rangos cuyos `X-Forwarded-For` y `X-Real-IP` se aceptan al determinar la IP del cliente.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustedProxies {
    redes: Vec<IpNetwork>,
}

impl TrustedProxies {
    pub fn parse<I, S>(rangos: I) -> Result<Self, ipnetwork::IpNetworkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let redes = rangos
            .into_iter()
            .map(|r| IpNetwork::from_str(r.as_ref().trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { redes })
    }

    pub fn contains(&self, ip: IpAddr) -> bool {
        self.redes.iter().any(|red| red.contains(ip))
    }

    /// Sólo un peer de confianza puede nombrar a otro cliente. Se prueba
    /// `X-Forwarded-For` y después `X-Real-IP`; si ninguna sirve, queda el peer.
    pub fn resolve(&self, peer: IpAddr, forwarded_for: Option<&str>, real_ip: Option<&str>) -> IpAddr {
        if !self.contains(peer) {
            return peer;
        }
        forwarded_for
            .and_then(|c| self.desde_cabecera(c))
            .or_else(|| real_ip.and_then(|c| self.desde_cabecera(c)))
            .unwrap_or(peer)
    }

    /// Recorre la cabecera de derecha a izquierda y devuelve el primer salto no
    /// confiable, o el primero si todos lo son. `None` si algún salto no es una IP.
    fn desde_cabecera(&self, cabecera: &str) -> Option<IpAddr> {
        let saltos: Vec<&str> = cabecera.split(',').collect();
        for (i, salto) in saltos.iter().enumerate().rev() {
            let ip = salto.trim().parse::<IpAddr>().ok()?;
            if i == 0 || !self.contains(ip) {
                return Some(ip);
            }
        }
        None
    }
}

impl Default for TrustedProxies {
    fn default() -> Self {
        Self::parse(DEFAULT_TRUSTED_PROXIES).unwrap_or(Self { redes: Vec::new() })
    }
}

/// IP del cliente según `TrustedProxies`; `None` si la conexión no tiene peer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientIp(pub Option<IpAddr>);

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ip) => write!(f, "{ip}"),
            None => f.write_str("desconocida"),
        }
    }
}

impl FromRequest for ClientIp {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let peer = req.peer_addr().map(|addr| addr.ip());
        let cabecera = |nombre: &str| req.headers().get(nombre).and_then(|v| v.to_str().ok());

        let ip = match (peer, req.app_data::<web::Data<TrustedProxies>>()) {
            (Some(peer), Some(confiables)) => Some(confiables.resolve(
                peer,
                cabecera("X-Forwarded-For"),
                cabecera("X-Real-IP"),
            )),
            (peer, _) => peer,
        };
        ready(Ok(ClientIp(ip)))
    }
}
