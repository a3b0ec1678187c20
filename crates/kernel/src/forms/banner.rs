//! Home-page banner payload.

use serde::{Deserialize, Serialize};

use crate::validator::{Validator, Verify};

/// Accepted `enable` values: 0 disabled, 1 enabled.
pub const BANNER_ENABLE_VALUES: &[i32] = &[0, 1];

/// Accepted `linkType` values: 0 internal link, 1 external link.
pub const BANNER_LINK_TYPES: &[i32] = &[0, 1];

/// A carousel banner as created or edited in the back office.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerRequest {
    pub id: u64,
    pub slogan: String,
    pub link_type: i32,
    pub link_url: String,
    pub image_url: String,
    pub enable: i32,
    pub sort: i32,
}

impl Verify for BannerRequest {
    fn verify(&self, v: &mut Validator) {
        v.check(!self.slogan.is_empty(), "slogan", "标题不能为空");
        let enable_ok = v.one_of(&self.enable, BANNER_ENABLE_VALUES);
        v.check(enable_ok, "enable", "enable仅支持1启用、0停用");
        // Link type failures are reported under the enable slot.
        let link_type_ok = v.one_of(&self.link_type, BANNER_LINK_TYPES);
        v.check(link_type_ok, "enable", "enable仅支持0内链、1外链");
        v.check(!self.image_url.is_empty(), "imageUrl", "请上传图片");
        v.check(!self.link_url.is_empty(), "linkType", "请填写跳转链接");
    }
}
