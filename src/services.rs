//! Concrete collaborators handed to the dialog.

use confbox_config::Conf;
use confbox_settings_ui::{BackendRegistry, CodepageOps, HostKeyValidator, PrinterOps, Services};
use confbox_ssh::BackendTable;

use crate::session_store::FileSessionStorage;

/// Backends from a fixed table.
#[derive(Debug, Clone, Default)]
pub struct StaticBackends {
    table: BackendTable,
}

impl StaticBackends {
    pub fn new(table: BackendTable) -> Self {
        Self { table }
    }
}

impl BackendRegistry for StaticBackends {
    fn default_port(&self, protocol: i32) -> Option<i32> {
        self.table.from_proto(protocol).map(|b| b.default_port)
    }

    fn is_launchable(&self, conf: &Conf) -> bool {
        confbox_ssh::is_launchable(conf)
    }
}

/// Host keys in any format `confbox_ssh` accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualHostKeys;

impl HostKeyValidator for ManualHostKeys {
    fn validate(&self, text: &str) -> Option<String> {
        confbox_ssh::validate_manual_hostkey(text)
    }
}

const CODEPAGES: &[&str] = &[
    "UTF-8",
    "ISO-8859-1:1998 (Latin-1, West Europe)",
    "ISO-8859-2:1999 (Latin-2, East Europe)",
    "ISO-8859-3:1999 (Latin-3, South Europe)",
    "ISO-8859-4:1998 (Latin-4, North Europe)",
    "ISO-8859-5:1999 (Latin/Cyrillic)",
    "ISO-8859-6:1999 (Latin/Arabic)",
    "ISO-8859-7:1987 (Latin/Greek)",
    "ISO-8859-8:1999 (Latin/Hebrew)",
    "ISO-8859-9:1999 (Latin-5, Turkish)",
    "ISO-8859-10:1998 (Latin-6, Nordic)",
    "ISO-8859-11:2001 (Latin/Thai)",
    "ISO-8859-13:1998 (Latin-7, Baltic)",
    "ISO-8859-14:1998 (Latin-8, Celtic)",
    "ISO-8859-15:1999 (Latin-9, \"euro\")",
    "ISO-8859-16:2001 (Latin-10, Balkan)",
    "KOI8-U",
    "KOI8-R",
    "HP-ROMAN8",
    "VSCII",
    "DEC-MCS",
    "Win1250 (Central European)",
    "Win1251 (Cyrillic)",
    "Win1252 (Western)",
    "Win1253 (Greek)",
    "Win1254 (Turkish)",
    "Win1255 (Hebrew)",
    "Win1256 (Arabic)",
    "Win1257 (Baltic)",
    "Win1258 (Vietnamese)",
    "CP437",
    "CP620 (Mazovia)",
    "CP819",
    "CP852",
    "CP878",
    "Use font encoding",
];

/// Comparison key for a codepage name: lowercase alphanumerics only, so
/// "iso8859_1", "ISO 8859-1" and "ISO-8859-1" agree.
fn fold(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The built-in codepage table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCodepages;

impl CodepageOps for StaticCodepages {
    fn enumerate(&self) -> Vec<String> {
        CODEPAGES.iter().map(|cp| cp.to_string()).collect()
    }

    fn canonicalize(&self, name: &str) -> String {
        let wanted = fold(name);
        if wanted.is_empty() {
            return CODEPAGES[0].to_string();
        }
        // Either the full name or its leading word ("ISO-8859-1", "Win1252").
        let found = CODEPAGES.iter().find(|cp| {
            let short = cp.split([' ', ':']).next().unwrap_or("");
            fold(cp) == wanted || fold(short) == wanted
        });
        match found {
            Some(cp) => cp.to_string(),
            None => {
                log::debug!("Unknown codepage {name:?}, using UTF-8");
                CODEPAGES[0].to_string()
            }
        }
    }
}

/// No printing support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrinters;

impl PrinterOps for NoPrinters {
    fn enumerate(&self) -> Vec<String> {
        Vec::new()
    }
}

/// The standard collaborator bundle over `storage`.
pub fn default_services(storage: FileSessionStorage, backends: &BackendTable) -> Services {
    Services {
        storage: Box::new(storage),
        backends: Box::new(StaticBackends::new(backends.clone())),
        hostkeys: Box::new(ManualHostKeys),
        codepages: Box::new(StaticCodepages),
        printers: Box::new(NoPrinters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confbox_config::ConfKey;
    use confbox_config::options::{PROT_CYGTERM, PROT_SERIAL, PROT_SSH, PROT_TELNET};

    #[test]
    fn test_backend_ports_come_from_table() {
        let backends = StaticBackends::default();
        assert_eq!(backends.default_port(PROT_SSH), Some(22));
        assert_eq!(backends.default_port(PROT_TELNET), Some(23));
        assert!(!backends.is_registered(PROT_CYGTERM));

        let telnet_only = StaticBackends::new(BackendTable::without_ssh());
        assert!(!telnet_only.is_registered(PROT_SSH));
    }

    #[test]
    fn test_launchable_field_depends_on_protocol() {
        let backends = StaticBackends::default();
        let mut conf = Conf::default();
        assert!(!backends.is_launchable(&conf));
        conf.set_str(ConfKey::Host, "example.com");
        assert!(backends.is_launchable(&conf));

        conf.set_int(ConfKey::Protocol, PROT_SERIAL);
        conf.set_str(ConfKey::SerLine, "");
        assert!(!backends.is_launchable(&conf));
        conf.set_str(ConfKey::SerLine, "/dev/ttyS0");
        assert!(backends.is_launchable(&conf));
    }

    #[test]
    fn test_codepage_canonicalization() {
        let cp = StaticCodepages;
        assert_eq!(cp.canonicalize("utf8"), "UTF-8");
        assert_eq!(cp.canonicalize("iso 8859_1"), "ISO-8859-1:1998 (Latin-1, West Europe)");
        assert_eq!(cp.canonicalize("win1252"), "Win1252 (Western)");
        assert_eq!(cp.canonicalize("koi8-u"), "KOI8-U");
        assert_eq!(cp.canonicalize("EBCDIC"), "UTF-8");
        assert_eq!(cp.canonicalize(""), "UTF-8");
    }

    #[test]
    fn test_codepage_list_starts_with_utf8() {
        let list = StaticCodepages.enumerate();
        assert_eq!(list[0], "UTF-8");
        assert!(list.iter().any(|cp| cp == "CP437"));
    }

    #[test]
    fn test_manual_host_keys_use_ssh_validator() {
        let keys = ManualHostKeys;
        assert!(keys.validate("not a key").is_none());
        let md5 = "MD5:AA:BB:CC:DD:EE:FF:00:11:22:33:44:55:66:77:88:99";
        assert_eq!(
            keys.validate(md5).as_deref(),
            Some("aa:bb:cc:dd:ee:ff:00:11:22:33:44:55:66:77:88:99")
        );
        assert!(NoPrinters.enumerate().is_empty());
    }
}
