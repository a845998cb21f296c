//! The compiled-in property table.
//!
//! Keys are published configuration surface: once released, a key and the meaning of its
//! value never change. New properties are appended within their component group.

use crate::property::PropertyType::{
    AbsolutePath, Boolean, Choice, Count, Duration, Fraction, HostList, Memory, Path, Port,
};
use crate::property::{PropertyDefinition, PropertyFlags, PropertyType};
use std::fmt;
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["compact", "full", "json"];
const COMPRESSION: &[&str] = &["gz", "lzo", "snappy", "none"];

macro_rules! properties {
    (
        $(
            $variant:ident {
                key: $key:literal,
                default: $default:literal,
                kind: $kind:expr,
                flags: [$($flag:ident),*],
                description: $description:literal $(,)?
            }
        ),+ $(,)?
    ) => {
        /// Identifier of a compiled-in property, in table order.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr,
        )]
        pub enum Property {
            $( #[doc = $description] $variant, )+
        }

        /// Every compiled-in definition. `PROPERTIES[p as usize].property == p` for every `p`.
        pub static PROPERTIES: &[PropertyDefinition] = &[
            $(
                PropertyDefinition {
                    property: Property::$variant,
                    key: $key,
                    default_value: $default,
                    property_type: $kind,
                    flags: PropertyFlags::from_bits_retain(0 $(| PropertyFlags::$flag.bits())*),
                    description: $description,
                },
            )+
        ];
    };
}

properties! {
    // instance
    InstanceCoordinators {
        key: "instance.coordinators.hosts",
        default: "localhost:2181",
        kind: HostList,
        flags: [FIXED],
        description: "Comma separated list of coordination servers used to locate the instance.",
    },
    InstanceCoordinatorTimeout {
        key: "instance.coordinators.timeout",
        default: "30s",
        kind: Duration,
        flags: [FIXED],
        description: "Session timeout for connections to the coordination servers.",
    },
    InstanceDfsUri {
        key: "instance.dfs.uri",
        default: "",
        kind: PropertyType::String,
        flags: [FIXED],
        description: "URI of the distributed filesystem holding instance data. Empty means the filesystem default.",
    },
    InstanceDfsDir {
        key: "instance.dfs.dir",
        default: "/basalt",
        kind: AbsolutePath,
        flags: [FIXED],
        description: "Directory on the distributed filesystem under which all instance data is stored.",
    },
    InstanceSecret {
        key: "instance.secret",
        default: "DEFAULT",
        kind: PropertyType::String,
        flags: [SENSITIVE, FIXED],
        description: "Shared secret used by servers of one instance to authenticate each other. Change it before production use.",
    },

    // general
    GeneralRpcTimeout {
        key: "general.rpc.timeout",
        default: "120s",
        kind: Duration,
        flags: [],
        description: "Time to wait on an I/O operation of a remote call before giving up.",
    },
    GeneralMaxMessageSize {
        key: "general.server.message.size.max",
        default: "1G",
        kind: Memory,
        flags: [FIXED],
        description: "Largest message a server will accept.",
    },
    GeneralTimerThreads {
        key: "general.server.timer.threads",
        default: "1",
        kind: Count,
        flags: [FIXED],
        description: "Number of threads servers use for periodic background tasks.",
    },
    GeneralLogLevel {
        key: "general.log.level",
        default: "info",
        kind: Choice(LOG_LEVELS),
        flags: [],
        description: "Lowest severity written by server processes. RUST_LOG directives take precedence.",
    },
    GeneralLogFormat {
        key: "general.log.format",
        default: "compact",
        kind: Choice(LOG_FORMATS),
        flags: [],
        description: "Format of log lines written to log files.",
    },
    GeneralLogDir {
        key: "general.log.dir",
        default: "",
        kind: Path,
        flags: [FIXED],
        description: "Directory for rolling log files. Empty disables file logging.",
    },
    GeneralLogMaxFiles {
        key: "general.log.files.max",
        default: "10",
        kind: Count,
        flags: [FIXED],
        description: "Number of rotated log files kept per process.",
    },

    // master
    MasterClientPort {
        key: "master.port.client",
        default: "9999",
        kind: Port,
        flags: [FIXED],
        description: "The port used for handling client connections on the master.",
    },
    MasterRecoveryDelay {
        key: "master.recovery.delay",
        default: "10s",
        kind: Duration,
        flags: [],
        description: "Time to wait before starting log recovery of a failed tablet server, giving it a chance to come back.",
    },
    MasterLeaseRecoveryWaiting {
        key: "master.lease.recovery.interval",
        default: "5s",
        kind: Duration,
        flags: [],
        description: "Interval at which the master checks whether file leases of dead tablet servers have been released.",
    },
    MasterThreadCheck {
        key: "master.server.threadcheck.time",
        default: "1s",
        kind: Duration,
        flags: [],
        description: "Time between adjustments of the master's client-handling thread pool.",
    },
    MasterMinThreads {
        key: "master.server.threads.minimum",
        default: "2",
        kind: Count,
        flags: [],
        description: "Minimum number of threads handling client requests on the master.",
    },
    MasterBulkRetries {
        key: "master.bulk.retries",
        default: "3",
        kind: Count,
        flags: [],
        description: "Number of attempts to bulk-load a file before giving up.",
    },
    MasterBulkThreadPoolSize {
        key: "master.bulk.threadpool.size",
        default: "5",
        kind: Count,
        flags: [],
        description: "Number of threads processing bulk imports.",
    },
    MasterBulkTimeout {
        key: "master.bulk.timeout",
        default: "5m",
        kind: Duration,
        flags: [],
        description: "Time to wait for a tablet server to process a bulk import request.",
    },
    MasterFateThreadPoolSize {
        key: "master.fate.threadpool.size",
        default: "4",
        kind: Count,
        flags: [],
        description: "Number of threads executing multi-step table operations.",
    },

    // tablet server
    TserverClientPort {
        key: "tserver.port.client",
        default: "9997",
        kind: Port,
        flags: [FIXED],
        description: "The port used for handling client connections on the tablet servers.",
    },
    TserverPortSearch {
        key: "tserver.port.search",
        default: "false",
        kind: Boolean,
        flags: [FIXED],
        description: "If the client port is taken, search upward for a free one.",
    },
    TserverMaxMemoryMaps {
        key: "tserver.memory.maps.max",
        default: "1G",
        kind: Memory,
        flags: [],
        description: "Maximum memory used to buffer writes before they are flushed to files.",
    },
    TserverNativeMaps {
        key: "tserver.memory.maps.native.enabled",
        default: "true",
        kind: Boolean,
        flags: [FIXED],
        description: "Use the off-heap sorted map implementation for write buffering when available.",
    },
    TserverDataCacheSize {
        key: "tserver.cache.data.size",
        default: "100M",
        kind: Memory,
        flags: [],
        description: "Size of the block cache for file data blocks.",
    },
    TserverIndexCacheSize {
        key: "tserver.cache.index.size",
        default: "512M",
        kind: Memory,
        flags: [],
        description: "Size of the block cache for file index blocks.",
    },
    TserverMinThreads {
        key: "tserver.server.threads.minimum",
        default: "2",
        kind: Count,
        flags: [],
        description: "Minimum number of threads handling client requests on a tablet server.",
    },
    TserverScanMaxOpenFiles {
        key: "tserver.scan.files.open.max",
        default: "100",
        kind: Count,
        flags: [FIXED],
        description: "Maximum number of files a tablet server keeps open for scans.",
    },
    TserverMajorCompactionMaxConcurrent {
        key: "tserver.compaction.major.concurrent.max",
        default: "3",
        kind: Count,
        flags: [],
        description: "Maximum number of concurrent major compactions on a tablet server.",
    },
    TserverMinorCompactionMaxConcurrent {
        key: "tserver.compaction.minor.concurrent.max",
        default: "4",
        kind: Count,
        flags: [],
        description: "Maximum number of concurrent minor compactions on a tablet server.",
    },
    TserverSessionMaxIdle {
        key: "tserver.session.idle.max",
        default: "1m",
        kind: Duration,
        flags: [],
        description: "Time after which an idle client session is closed.",
    },
    TserverWalogMaxSize {
        key: "tserver.walog.max.size",
        default: "1G",
        kind: Memory,
        flags: [],
        description: "Size at which a write-ahead log is closed and a new one is started.",
    },
    TserverHoldTime {
        key: "tserver.hold.time.max",
        default: "5m",
        kind: Duration,
        flags: [],
        description: "Maximum time writes may be held back waiting for memory before the tablet server kills itself.",
    },

    // write-ahead logger
    LoggerClientPort {
        key: "logger.port.client",
        default: "11224",
        kind: Port,
        flags: [FIXED],
        description: "The port used for write-ahead logger services.",
    },
    LoggerDir {
        key: "logger.dir.walog",
        default: "walogs",
        kind: Path,
        flags: [FIXED],
        description: "Local directory holding write-ahead logs. Relative paths are resolved against the data directory.",
    },
    LoggerCopyThreads {
        key: "logger.copy.threadpool.size",
        default: "2",
        kind: Count,
        flags: [],
        description: "Number of threads copying write-ahead logs to the distributed filesystem for recovery.",
    },

    // garbage collector
    GcCycleStart {
        key: "gc.cycle.start",
        default: "30s",
        kind: Duration,
        flags: [],
        description: "Time to wait before the first garbage collection cycle.",
    },
    GcCycleDelay {
        key: "gc.cycle.delay",
        default: "5m",
        kind: Duration,
        flags: [],
        description: "Time between garbage collection cycles.",
    },
    GcPort {
        key: "gc.port.client",
        default: "50091",
        kind: Port,
        flags: [FIXED],
        description: "The listening port for the garbage collector's monitor service.",
    },
    GcDeleteThreads {
        key: "gc.threads.delete",
        default: "16",
        kind: Count,
        flags: [],
        description: "Number of threads used to delete files.",
    },
    GcTrashIgnore {
        key: "gc.trash.ignore",
        default: "false",
        kind: Boolean,
        flags: [],
        description: "Delete files outright instead of moving them to the filesystem trash.",
    },

    // monitor
    MonitorPort {
        key: "monitor.port.client",
        default: "50095",
        kind: Port,
        flags: [FIXED],
        description: "The listening port for the monitor's HTTP service.",
    },
    MonitorLogPort {
        key: "monitor.port.log",
        default: "4560",
        kind: Port,
        flags: [FIXED],
        description: "The listening port for log events forwarded to the monitor.",
    },
    MonitorBannerText {
        key: "monitor.banner.text",
        default: "",
        kind: PropertyType::String,
        flags: [],
        description: "Text displayed in a banner above every monitor page.",
    },

    // tracer
    TracePort {
        key: "trace.port.client",
        default: "12234",
        kind: Port,
        flags: [FIXED],
        description: "The listening port for the trace server.",
    },
    TraceTable {
        key: "trace.table",
        default: "trace",
        kind: PropertyType::String,
        flags: [],
        description: "Table used to store distributed traces.",
    },
    TraceUser {
        key: "trace.user",
        default: "root",
        kind: PropertyType::String,
        flags: [],
        description: "User the tracer connects as.",
    },
    TracePassword {
        key: "trace.password",
        default: "secret",
        kind: PropertyType::String,
        flags: [SENSITIVE],
        description: "Password of the tracer user.",
    },

    // table
    TableSplitThreshold {
        key: "table.split.threshold",
        default: "1G",
        kind: Memory,
        flags: [],
        description: "A tablet is split when the combined size of its files exceeds this amount.",
    },
    TableMajorCompactionRatio {
        key: "table.compaction.major.ratio",
        default: "3",
        kind: Fraction,
        flags: [],
        description: "Minimum ratio of total input size to largest file size for a set of files to be compacted.",
    },
    TableMajorCompactionIdle {
        key: "table.compaction.major.everything.idle",
        default: "1h",
        kind: Duration,
        flags: [],
        description: "After a tablet has been idle this long, all of its files are compacted into one.",
    },
    TableMinorCompactionLogsThreshold {
        key: "table.compaction.minor.logs.threshold",
        default: "3",
        kind: Count,
        flags: [],
        description: "Number of write-ahead logs referenced by a tablet that triggers a minor compaction.",
    },
    TableScanMaxMemory {
        key: "table.scan.max.memory",
        default: "512K",
        kind: Memory,
        flags: [],
        description: "Maximum amount of memory buffered per scan batch before it is returned to the client.",
    },
    TableFileCompressionType {
        key: "table.file.compress.type",
        default: "gz",
        kind: Choice(COMPRESSION),
        flags: [],
        description: "Compression algorithm used for files written by this table.",
    },
    TableFileCompressedBlockSize {
        key: "table.file.compress.blocksize",
        default: "100K",
        kind: Memory,
        flags: [],
        description: "Size of compressed blocks in files written by this table.",
    },
    TableFileReplication {
        key: "table.file.replication",
        default: "0",
        kind: Count,
        flags: [],
        description: "Filesystem replication factor for files of this table. 0 uses the filesystem default.",
    },
    TableFileMax {
        key: "table.file.max",
        default: "15",
        kind: Count,
        flags: [],
        description: "Maximum number of files per tablet before merging minor compactions are forced.",
    },
    TableBloomEnabled {
        key: "table.bloom.enabled",
        default: "false",
        kind: Boolean,
        flags: [],
        description: "Write bloom filters with the files of this table.",
    },
    TableBloomErrorRate {
        key: "table.bloom.error.rate",
        default: "0.5%",
        kind: Fraction,
        flags: [],
        description: "Target false-positive rate of bloom filters.",
    },
    TableBlockCacheEnabled {
        key: "table.cache.block.enable",
        default: "false",
        kind: Boolean,
        flags: [],
        description: "Cache data blocks of this table in the tablet server block cache.",
    },
    TableIndexCacheEnabled {
        key: "table.cache.index.enable",
        default: "true",
        kind: Boolean,
        flags: [],
        description: "Cache index blocks of this table in the tablet server block cache.",
    },
    TableWalogEnabled {
        key: "table.walog.enabled",
        default: "true",
        kind: Boolean,
        flags: [],
        description: "Write mutations of this table to the write-ahead log.",
    },
    TableFailuresIgnore {
        key: "table.failures.ignore",
        default: "false",
        kind: Boolean,
        flags: [],
        description: "Serve queries even when some files of this table cannot be read.",
    },
    TableDefaultScanVisibility {
        key: "table.security.scan.visibility.default",
        default: "",
        kind: PropertyType::String,
        flags: [],
        description: "Visibility applied to entries with an empty visibility when they are scanned.",
    },
}

impl Property {
    /// The compiled-in definition of this property.
    #[must_use]
    pub fn definition(self) -> &'static PropertyDefinition {
        &PROPERTIES[self as usize]
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.definition().key
    }

    #[must_use]
    pub fn default_value(self) -> &'static str {
        self.definition().default_value
    }

    #[must_use]
    pub fn property_type(self) -> PropertyType {
        self.definition().property_type
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        self.definition().description
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
