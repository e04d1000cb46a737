//! Director request model and argument assembly.
//!
//! [`DirectorRequest`] is the flat record of options recognized by the p2
//! director application. It is deserialized from the request file, validated
//! once, and translated into the ordered argument list by [`build_args`].
//! The emission order follows the upstream director documentation so the
//! rendered command line is comparable with other director front-ends.
//!
//! [`build_args`]: DirectorRequest::build_args

use camino::Utf8PathBuf;
use indexmap::IndexMap;
use serde::Deserialize;
use url::Url;

use super::args::DirectorArgsBuilder;
use crate::error::DirectorError;

/// Profile property forced to `"true"` when `install_features` is set.
pub const INSTALL_FEATURES_PROPERTY: &str = "org.eclipse.update.install.features";

/// A structured installable-unit descriptor.
///
/// The alternative to listing units as a comma-separated string. A feature
/// unit gets `.feature.group` appended to its id on rendering, which is how
/// p2 names the group IU of a feature.
#[derive(Debug, Clone, Deserialize)]
pub struct InstallableUnit {
    /// Unit identifier.
    pub id: String,
    /// Exact version to install; omitted means "newest available".
    #[serde(default)]
    pub version: Option<String>,
    /// Whether the id names a feature rather than a plain IU.
    #[serde(default)]
    pub feature: bool,
}

impl InstallableUnit {
    /// Renders the unit in the director's `<id>[/<version>]` form.
    pub fn render(&self) -> String {
        let mut rendered = self.id.clone();
        if self.feature {
            rendered.push_str(".feature.group");
        }
        if let Some(version) = &self.version {
            rendered.push('/');
            rendered.push_str(version);
        }
        rendered
    }
}

/// A single director invocation, as read from the request file.
///
/// Every field except `destination` is optional; an absent field emits no
/// argument tokens at all. Field names follow the director's option names,
/// snake-cased.
#[derive(Debug, Deserialize)]
pub struct DirectorRequest {
    /// The folder in which the targeted product is located.
    pub destination: Utf8PathBuf,

    /// Comma-separated list of URLs denoting metadata repositories.
    #[serde(default)]
    pub metadata_repositories: Option<String>,
    /// Comma-separated list of URLs denoting artifact repositories.
    #[serde(default)]
    pub artifact_repositories: Option<String>,
    /// Comma-separated list of URLs denoting co-located metadata and
    /// artifact repositories.
    #[serde(default)]
    pub repositories: Option<String>,

    /// Units to install as a comma-separated string, each entry in the
    /// form `<id>['/'<version>]`.
    #[serde(default)]
    pub install_ius: Option<String>,
    /// Units to install as structured descriptors; merged after
    /// `install_ius` entries.
    #[serde(default)]
    pub install: Vec<InstallableUnit>,
    /// Units to remove as a comma-separated string.
    #[serde(default)]
    pub uninstall_ius: Option<String>,
    /// Units to remove as structured descriptors; merged after
    /// `uninstall_ius` entries.
    #[serde(default)]
    pub uninstall: Vec<InstallableUnit>,

    /// Comma-separated list of profile state numbers to revert to.
    #[serde(default)]
    pub revert: Option<String>,
    /// Remove the history of the profile registry.
    #[serde(default)]
    pub purge_history: bool,

    /// List all IUs found in the given repositories.
    #[serde(default)]
    pub list: bool,
    /// List the tags available.
    #[serde(default)]
    pub list_tags: bool,
    /// List all root IUs found in the given profile.
    #[serde(default)]
    pub list_installed_roots: bool,
    /// Format string for listed IUs, e.g. `${id}/${version}`.
    #[serde(default)]
    pub list_format: Option<String>,

    /// The profile to use for the actions.
    #[serde(default)]
    pub profile: Option<String>,
    /// Profile properties as a comma-separated `key=value` string.
    /// Effective only when a new profile is created.
    #[serde(default)]
    pub profile_properties: Option<String>,
    /// Additional profile properties; entries override same-keyed entries
    /// from `profile_properties`.
    #[serde(default)]
    pub properties: IndexMap<String, String>,
    /// Shorthand that forces `org.eclipse.update.install.features=true`
    /// into the profile properties.
    #[serde(default)]
    pub install_features: bool,
    /// Path to a properties file listing IU profile properties to set.
    #[serde(default)]
    pub iu_profile_properties: Option<Utf8PathBuf>,

    /// The flavor to use for a newly created profile.
    #[serde(default)]
    pub flavor: Option<String>,
    /// Where plug-ins and features are stored when a new profile is created.
    #[serde(default)]
    pub bundlepool: Option<Utf8PathBuf>,

    /// OS to use when the profile is created (`-p2.os`).
    #[serde(default)]
    pub os: Option<String>,
    /// Windowing system to use when the profile is created (`-p2.ws`).
    #[serde(default)]
    pub ws: Option<String>,
    /// Architecture to use when the profile is created (`-p2.arch`).
    #[serde(default)]
    pub arch: Option<String>,
    /// Language to use when the profile is created (`-p2.nl`).
    #[serde(default)]
    pub nl: Option<String>,

    /// Mark the resulting installation as movable.
    #[serde(default)]
    pub roaming: bool,
    /// Shared install location: absent for none, empty string for the
    /// default location (`~/.p2`), otherwise an explicit path.
    #[serde(default)]
    pub shared: Option<String>,
    /// Tag the provisioning operation for easy reverting.
    #[serde(default)]
    pub tag: Option<String>,

    /// Only verify that the actions can be performed.
    #[serde(default)]
    pub verify_only: bool,
    /// Only download the artifacts.
    #[serde(default)]
    pub download_only: bool,
    /// Follow repository references.
    #[serde(default)]
    pub follow_references: bool,

    /// Print detailed information about content trust.
    #[serde(default)]
    pub verbose_trust: bool,
    /// Trust each artifact only if it is jar-signed or PGP-signed.
    #[serde(default)]
    pub trust_signed_content_only: bool,
    /// Comma-separated list of authorities from which repository content
    /// is trusted.
    #[serde(default)]
    pub trusted_authorities: Option<String>,
    /// Comma-separated list of fingerprints of PGP keys to trust as
    /// artifact signers.
    #[serde(default)]
    pub trusted_pgp_keys: Option<String>,
    /// Comma-separated list of SHA-256 fingerprints of unanchored
    /// certificates to trust as artifact signers.
    #[serde(default)]
    pub trusted_certificates: Option<String>,
}

/// Merges a comma-separated unit string and structured descriptors into a
/// single rendered list. CSV entries come first, trimmed, with empty
/// entries dropped.
fn unit_list(csv: Option<&str>, units: &[InstallableUnit]) -> Vec<String> {
    let mut list = Vec::new();
    if let Some(csv) = csv {
        for entry in csv.split(',') {
            let entry = entry.trim();
            if !entry.is_empty() {
                list.push(entry.to_string());
            }
        }
    }
    for unit in units {
        list.push(unit.render());
    }
    list
}

impl DirectorRequest {
    /// Validates everything that can fail before the director is invoked.
    ///
    /// Covers the checks the argument assembly relies on (property entries,
    /// unit ids) plus repository URL and revert-number syntax, so a
    /// `validate` run catches what would otherwise only surface inside the
    /// external application.
    pub fn validate(&self) -> Result<(), DirectorError> {
        if self.destination.as_str().is_empty() {
            return Err(DirectorError::Validation(
                "destination must not be empty".to_string(),
            ));
        }

        let repository_fields = [
            ("metadata_repositories", &self.metadata_repositories),
            ("artifact_repositories", &self.artifact_repositories),
            ("repositories", &self.repositories),
        ];
        for (field, csv) in repository_fields {
            let Some(csv) = csv else { continue };
            for entry in csv.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                Url::parse(entry).map_err(|e| {
                    DirectorError::Validation(format!(
                        "{}: invalid repository URL '{}': {}",
                        field, entry, e
                    ))
                })?;
            }
        }

        if let Some(revert) = &self.revert {
            for entry in revert.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                entry.parse::<u64>().map_err(|_| {
                    DirectorError::Validation(format!(
                        "revert: profile state '{}' is not a number",
                        entry
                    ))
                })?;
            }
        }

        for unit in self.install.iter().chain(self.uninstall.iter()) {
            if unit.id.trim().is_empty() {
                return Err(DirectorError::Validation(
                    "installable unit id must not be empty".to_string(),
                ));
            }
        }

        self.profile_property_map()?;

        Ok(())
    }

    /// Builds the merged, order-preserving profile property map.
    ///
    /// CSV entries are parsed first; `properties` entries override them
    /// in place (an overridden key keeps its original position, new keys
    /// append); `install_features` forces the feature-install property last.
    pub fn profile_property_map(&self) -> Result<IndexMap<String, String>, DirectorError> {
        let mut map = IndexMap::new();

        if let Some(csv) = &self.profile_properties {
            for entry in csv.split(',') {
                let entry = entry.trim();
                if entry.is_empty() {
                    continue;
                }
                let Some((key, value)) = entry.split_once('=') else {
                    return Err(DirectorError::Validation(format!(
                        "malformed profile property entry: '{}' (expected key=value)",
                        entry
                    )));
                };
                let key = key.trim();
                if key.is_empty() {
                    return Err(DirectorError::Validation(format!(
                        "malformed profile property entry: '{}' (empty key)",
                        entry
                    )));
                }
                map.insert(key.to_string(), value.trim().to_string());
            }
        }

        for (key, value) in &self.properties {
            map.insert(key.clone(), value.clone());
        }

        if self.install_features {
            map.insert(INSTALL_FEATURES_PROPERTY.to_string(), "true".to_string());
        }

        Ok(map)
    }

    /// Translates the request into the ordered director argument list.
    ///
    /// Deterministic and side-effect free; the only failure mode is a
    /// malformed profile property entry.
    pub fn build_args(&self) -> Result<Vec<String>, DirectorError> {
        let mut builder = DirectorArgsBuilder::new();

        builder.push_scalar("-destination", self.destination.as_str());
        builder.push_opt_scalar("-metadatarepository", self.metadata_repositories.as_deref());
        builder.push_opt_scalar("-artifactrepository", self.artifact_repositories.as_deref());
        builder.push_opt_scalar("-repository", self.repositories.as_deref());

        builder.push_comma_joined(
            "-installIU",
            &unit_list(self.install_ius.as_deref(), &self.install),
        );
        builder.push_comma_joined(
            "-uninstallIU",
            &unit_list(self.uninstall_ius.as_deref(), &self.uninstall),
        );

        builder.push_opt_scalar("-revert", self.revert.as_deref());
        builder.push_flag_if("-purgeHistory", self.purge_history);
        builder.push_flag_if("-list", self.list);
        builder.push_flag_if("-listTags", self.list_tags);
        builder.push_flag_if("-listInstalledRoots", self.list_installed_roots);
        builder.push_opt_scalar("-listFormat", self.list_format.as_deref());
        builder.push_opt_scalar("-profile", self.profile.as_deref());

        let properties = self.profile_property_map()?;
        let rendered: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        builder.push_comma_joined("-profileproperties", &rendered);

        builder.push_opt_scalar(
            "-iuProfileproperties",
            self.iu_profile_properties.as_ref().map(|path| path.as_str()),
        );
        builder.push_opt_scalar("-flavor", self.flavor.as_deref());
        builder.push_opt_scalar(
            "-bundlepool",
            self.bundlepool.as_ref().map(|path| path.as_str()),
        );
        builder.push_opt_scalar("-p2.os", self.os.as_deref());
        builder.push_opt_scalar("-p2.ws", self.ws.as_deref());
        builder.push_opt_scalar("-p2.arch", self.arch.as_deref());
        builder.push_opt_scalar("-p2.nl", self.nl.as_deref());
        builder.push_flag_if("-roaming", self.roaming);
        builder.push_tri_state("-shared", self.shared.as_deref());
        builder.push_opt_scalar("-tag", self.tag.as_deref());
        builder.push_flag_if("-verifyOnly", self.verify_only);
        builder.push_flag_if("-downloadOnly", self.download_only);
        builder.push_flag_if("-followReferences", self.follow_references);
        builder.push_flag_if("-verboseTrust", self.verbose_trust);
        builder.push_flag_if("-trustSignedContentOnly", self.trust_signed_content_only);
        builder.push_opt_scalar("-trustedAuthorities", self.trusted_authorities.as_deref());
        builder.push_opt_scalar("-trustedPGPKeys", self.trusted_pgp_keys.as_deref());
        builder.push_opt_scalar("-trustedCertificates", self.trusted_certificates.as_deref());

        let args = builder.into_args();
        tracing::debug!("assembled {} director argument tokens", args.len());
        Ok(args)
    }
}
