use mac_changer::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// ifconfig look-alike keeping the address of a single `eth0` in a file.
/// Creating `ignore` in the same directory turns writes into silent no-ops.
const FAKE_IFCONFIG: &str = r#"
DIR="$(dirname "$0")"
iface="$1"
if [ "$iface" != "eth0" ]; then
    echo "$iface: error fetching interface information: Device not found" >&2
    exit 1
fi
shift
case "$*" in
    "")
        printf 'eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500\n'
        printf '        ether %s  txqueuelen 1000  (Ethernet)\n' "$(cat "$DIR/state")"
        ;;
    down|up)
        ;;
    "hw ether "*)
        [ -e "$DIR/ignore" ] || echo "$3" > "$DIR/state"
        ;;
    *)
        echo "ifconfig: bad arguments: $*" >&2
        exit 2
        ;;
esac
"#;

/// A temporary directory holding the fake tool and its state
pub struct FakeTool {
    dir: TempDir,
}

#[allow(dead_code)]
impl FakeTool {
    pub fn new(initial_mac: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ifconfig.sh"), FAKE_IFCONFIG).unwrap();
        std::fs::write(dir.path().join("state"), format!("{}\n", initial_mac)).unwrap();
        Self { dir }
    }

    pub fn ignore_writes(&self) {
        std::fs::write(self.dir.path().join("ignore"), "").unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn script(&self) -> PathBuf {
        self.dir.path().join("ifconfig.sh")
    }

    pub fn state(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("state"))
            .unwrap()
            .trim()
            .to_string()
    }

    /// Run through `sh` so the script never needs the exec bit
    pub fn config(&self) -> Config {
        let script = self.script().to_string_lossy().into_owned();
        let with_script = |args: &[&str]| {
            std::iter::once(script.clone())
                .chain(args.iter().map(|s| s.to_string()))
                .collect::<Vec<String>>()
        };

        Config {
            tool: "sh".to_string(),
            show_args: with_script(&["{interface}"]),
            set_args: with_script(&["{interface}", "hw", "ether", "{mac}"]),
            down_args: with_script(&["{interface}", "down"]),
            up_args: with_script(&["{interface}", "up"]),
            cycle_link: true,
            timeout_secs: 10,
            require_root: false,
        }
    }

    /// Write `config()` as YAML next to the script and return its path
    pub fn config_file(&self) -> PathBuf {
        let path = self.dir.path().join("config.yaml");
        std::fs::write(&path, serde_yaml::to_string(&self.config()).unwrap()).unwrap();
        path
    }
}
