// Copyright 2025 The TencentCloud Rust SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The error codes returned by the Cloud Virtual Machine service.
//!
//! Compare these against [Error::code][common::error::Error::code]
//! to handle specific service errors.
//!
//! # Example
//! ```
//! # use common::error::{Error, SdkError};
//! use tencentcloud_cvm_v20170312::errors;
//! let error = Error::service(SdkError::new(errors::INVALIDKEYPAIRID_NOTFOUND, "no such key pair", "r-1"));
//! if error.code() == Some(errors::INVALIDKEYPAIRID_NOTFOUND) {
//!     println!("the key pair was deleted");
//! }
//! ```

pub const ACCOUNTQUALIFICATIONRESTRICTIONS: &str = "AccountQualificationRestrictions";
pub const AUTHFAILURE_CAMROLENAMEAUTHENTICATEFAILED: &str = "AuthFailure.CamRoleNameAuthenticateFailed";
pub const ENINOTALLOWEDCHANGESUBNET: &str = "EniNotAllowedChangeSubnet";
pub const FAILEDOPERATION_ACCOUNTALREADYEXISTS: &str = "FailedOperation.AccountAlreadyExists";
pub const FAILEDOPERATION_ACCOUNTISYOURSELF: &str = "FailedOperation.AccountIsYourSelf";
pub const FAILEDOPERATION_BYOLIMAGESHAREFAILED: &str = "FailedOperation.BYOLImageShareFailed";
pub const FAILEDOPERATION_DISASTERRECOVERGROUPNOTFOUND: &str = "FailedOperation.DisasterRecoverGroupNotFound";
pub const FAILEDOPERATION_ILLEGALTAGKEY: &str = "FailedOperation.IllegalTagKey";
pub const FAILEDOPERATION_ILLEGALTAGVALUE: &str = "FailedOperation.IllegalTagValue";
pub const FAILEDOPERATION_INQUIRYPRICEFAILED: &str = "FailedOperation.InquiryPriceFailed";
pub const FAILEDOPERATION_INQUIRYREFUNDPRICEFAILED: &str = "FailedOperation.InquiryRefundPriceFailed";
pub const FAILEDOPERATION_INVALIDIMAGESTATE: &str = "FailedOperation.InvalidImageState";
pub const FAILEDOPERATION_INVALIDINSTANCEAPPLICATIONROLEEMR: &str = "FailedOperation.InvalidInstanceApplicationRoleEmr";
pub const FAILEDOPERATION_NOAVAILABLEIPADDRESSCOUNTINSUBNET: &str = "FailedOperation.NoAvailableIpAddressCountInSubnet";
pub const FAILEDOPERATION_NOTFOUNDEIP: &str = "FailedOperation.NotFoundEIP";
pub const FAILEDOPERATION_NOTMASTERACCOUNT: &str = "FailedOperation.NotMasterAccount";
pub const FAILEDOPERATION_PLACEMENTSETNOTEMPTY: &str = "FailedOperation.PlacementSetNotEmpty";
pub const FAILEDOPERATION_PROMOTIONALPERIORESTRICTION: &str = "FailedOperation.PromotionalPerioRestriction";
pub const FAILEDOPERATION_PROMOTIONALREGIONRESTRICTION: &str = "FailedOperation.PromotionalRegionRestriction";
pub const FAILEDOPERATION_QIMAGESHAREFAILED: &str = "FailedOperation.QImageShareFailed";
pub const FAILEDOPERATION_RIMAGESHAREFAILED: &str = "FailedOperation.RImageShareFailed";
pub const FAILEDOPERATION_SECURITYGROUPACTIONFAILED: &str = "FailedOperation.SecurityGroupActionFailed";
pub const FAILEDOPERATION_SNAPSHOTSIZELARGERTHANDATASIZE: &str = "FailedOperation.SnapshotSizeLargerThanDataSize";
pub const FAILEDOPERATION_SNAPSHOTSIZELESSTHANDATASIZE: &str = "FailedOperation.SnapshotSizeLessThanDataSize";
pub const FAILEDOPERATION_TAGKEYRESERVED: &str = "FailedOperation.TagKeyReserved";
pub const FAILEDOPERATION_TATAGENTNOTSUPPORT: &str = "FailedOperation.TatAgentNotSupport";
pub const FAILEDOPERATION_UNRETURNABLE: &str = "FailedOperation.Unreturnable";
pub const IMAGEQUOTALIMITEXCEEDED: &str = "ImageQuotaLimitExceeded";
pub const INSTANCESQUOTALIMITEXCEEDED: &str = "InstancesQuotaLimitExceeded";
pub const INTERNALERROR: &str = "InternalError";
pub const INTERNALERROR_TRADEUNKNOWNERROR: &str = "InternalError.TradeUnknownError";
pub const INTERNALSERVERERROR: &str = "InternalServerError";
pub const INVALIDACCOUNTID_NOTFOUND: &str = "InvalidAccountId.NotFound";
pub const INVALIDACCOUNTIS_YOURSELF: &str = "InvalidAccountIs.YourSelf";
pub const INVALIDACCOUNT_INSUFFICIENTBALANCE: &str = "InvalidAccount.InsufficientBalance";
pub const INVALIDACCOUNT_UNPAIDORDER: &str = "InvalidAccount.UnpaidOrder";
pub const INVALIDCLIENTTOKEN_TOOLONG: &str = "InvalidClientToken.TooLong";
pub const INVALIDFILTER: &str = "InvalidFilter";
pub const INVALIDFILTERVALUE_LIMITEXCEEDED: &str = "InvalidFilterValue.LimitExceeded";
pub const INVALIDHOSTID_MALFORMED: &str = "InvalidHostId.Malformed";
pub const INVALIDHOSTID_NOTFOUND: &str = "InvalidHostId.NotFound";
pub const INVALIDHOST_NOTSUPPORTED: &str = "InvalidHost.NotSupported";
pub const INVALIDIMAGEID_INCORRECTSTATE: &str = "InvalidImageId.IncorrectState";
pub const INVALIDIMAGEID_INSHARED: &str = "InvalidImageId.InShared";
pub const INVALIDIMAGEID_MALFORMED: &str = "InvalidImageId.Malformed";
pub const INVALIDIMAGEID_NOTFOUND: &str = "InvalidImageId.NotFound";
pub const INVALIDIMAGEID_TOOLARGE: &str = "InvalidImageId.TooLarge";
pub const INVALIDIMAGENAME_DUPLICATE: &str = "InvalidImageName.Duplicate";
pub const INVALIDIMAGEOSTYPE_UNSUPPORTED: &str = "InvalidImageOsType.Unsupported";
pub const INVALIDIMAGEOSVERSION_UNSUPPORTED: &str = "InvalidImageOsVersion.Unsupported";
pub const INVALIDINSTANCEID_MALFORMED: &str = "InvalidInstanceId.Malformed";
pub const INVALIDINSTANCEID_NOTFOUND: &str = "InvalidInstanceId.NotFound";
pub const INVALIDINSTANCENAME_TOOLONG: &str = "InvalidInstanceName.TooLong";
pub const INVALIDINSTANCENOTSUPPORTEDPREPAIDINSTANCE: &str = "InvalidInstanceNotSupportedPrepaidInstance";
pub const INVALIDINSTANCESTATE: &str = "InvalidInstanceState";
pub const INVALIDINSTANCETYPE_MALFORMED: &str = "InvalidInstanceType.Malformed";
pub const INVALIDINSTANCE_NOTSUPPORTED: &str = "InvalidInstance.NotSupported";
pub const INVALIDKEYPAIRID_MALFORMED: &str = "InvalidKeyPairId.Malformed";
pub const INVALIDKEYPAIRID_NOTFOUND: &str = "InvalidKeyPairId.NotFound";
pub const INVALIDKEYPAIRNAMEEMPTY: &str = "InvalidKeyPairNameEmpty";
pub const INVALIDKEYPAIRNAMEINCLUDEILLEGALCHAR: &str = "InvalidKeyPairNameIncludeIllegalChar";
pub const INVALIDKEYPAIRNAMETOOLONG: &str = "InvalidKeyPairNameTooLong";
pub const INVALIDKEYPAIRNAME_DUPLICATE: &str = "InvalidKeyPairName.Duplicate";
pub const INVALIDKEYPAIR_LIMITEXCEEDED: &str = "InvalidKeyPair.LimitExceeded";
pub const INVALIDPARAMETER: &str = "InvalidParameter";
pub const INVALIDPARAMETERCOMBINATION: &str = "InvalidParameterCombination";
pub const INVALIDPARAMETERCONFLICT: &str = "InvalidParameterConflict";
pub const INVALIDPARAMETERVALUE: &str = "InvalidParameterValue";
pub const INVALIDPARAMETERVALUELIMIT: &str = "InvalidParameterValueLimit";
pub const INVALIDPARAMETERVALUEOFFSET: &str = "InvalidParameterValueOffset";
pub const INVALIDPARAMETERVALUE_AMOUNTNOTEQUAL: &str = "InvalidParameterValue.AmountNotEqual";
pub const INVALIDPARAMETERVALUE_BANDWIDTHPACKAGEIDMALFORMED: &str = "InvalidParameterValue.BandwidthPackageIdMalformed";
pub const INVALIDPARAMETERVALUE_BANDWIDTHPACKAGEIDNOTFOUND: &str = "InvalidParameterValue.BandwidthPackageIdNotFound";
pub const INVALIDPARAMETERVALUE_BASICNETWORKINSTANCEFAMILY: &str = "InvalidParameterValue.BasicNetworkInstanceFamily";
pub const INVALIDPARAMETERVALUE_BUCKETNOTFOUND: &str = "InvalidParameterValue.BucketNotFound";
pub const INVALIDPARAMETERVALUE_CAMROLENAMEMALFORMED: &str = "InvalidParameterValue.CamRoleNameMalformed";
pub const INVALIDPARAMETERVALUE_CDHONLYLOCALDATADISKRESIZE: &str = "InvalidParameterValue.CdhOnlyLocalDataDiskResize";
pub const INVALIDPARAMETERVALUE_CHCHOSTSNOTFOUND: &str = "InvalidParameterValue.ChcHostsNotFound";
pub const INVALIDPARAMETERVALUE_CHCNETWORKEMPTY: &str = "InvalidParameterValue.ChcNetworkEmpty";
pub const INVALIDPARAMETERVALUE_CLOUDSSDDATADISKSIZETOOSMALL: &str = "InvalidParameterValue.CloudSsdDataDiskSizeTooSmall";
pub const INVALIDPARAMETERVALUE_CORECOUNTVALUE: &str = "InvalidParameterValue.CoreCountValue";
pub const INVALIDPARAMETERVALUE_DEDICATEDCLUSTERNOTSUPPORTEDCHARGETYPE: &str = "InvalidParameterValue.DedicatedClusterNotSupportedChargeType";
pub const INVALIDPARAMETERVALUE_DEPLOYVPCALREADYEXISTS: &str = "InvalidParameterValue.DeployVpcAlreadyExists";
pub const INVALIDPARAMETERVALUE_DISASTERRECOVERGROUPIDMALFORMED: &str = "InvalidParameterValue.DisasterRecoverGroupIdMalformed";
pub const INVALIDPARAMETERVALUE_DUPLICATE: &str = "InvalidParameterValue.Duplicate";
pub const INVALIDPARAMETERVALUE_DUPLICATETAGS: &str = "InvalidParameterValue.DuplicateTags";
pub const INVALIDPARAMETERVALUE_GPUINSTANCEFAMILY: &str = "InvalidParameterValue.GPUInstanceFamily";
pub const INVALIDPARAMETERVALUE_HPCCLUSTERIDZONEIDNOTMATCH: &str = "InvalidParameterValue.HpcClusterIdZoneIdNotMatch";
pub const INVALIDPARAMETERVALUE_ILLEGALHOSTNAME: &str = "InvalidParameterValue.IllegalHostName";
pub const INVALIDPARAMETERVALUE_INCORRECTFORMAT: &str = "InvalidParameterValue.IncorrectFormat";
pub const INVALIDPARAMETERVALUE_INSTANCEIDMALFORMED: &str = "InvalidParameterValue.InstanceIdMalformed";
pub const INVALIDPARAMETERVALUE_INSTANCENOTSUPPORTEDMIXPRICINGMODEL: &str = "InvalidParameterValue.InstanceNotSupportedMixPricingModel";
pub const INVALIDPARAMETERVALUE_INSTANCETYPENOTFOUND: &str = "InvalidParameterValue.InstanceTypeNotFound";
pub const INVALIDPARAMETERVALUE_INSTANCETYPENOTSUPPORTHPCCLUSTER: &str = "InvalidParameterValue.InstanceTypeNotSupportHpcCluster";
pub const INVALIDPARAMETERVALUE_INSTANCETYPEREQUIREDHPCCLUSTER: &str = "InvalidParameterValue.InstanceTypeRequiredHpcCluster";
pub const INVALIDPARAMETERVALUE_INSUFFICIENTOFFERING: &str = "InvalidParameterValue.InsufficientOffering";
pub const INVALIDPARAMETERVALUE_INSUFFICIENTPRICE: &str = "InvalidParameterValue.InsufficientPrice";
pub const INVALIDPARAMETERVALUE_INVALIDAPPIDFORMAT: &str = "InvalidParameterValue.InvalidAppIdFormat";
pub const INVALIDPARAMETERVALUE_INVALIDBOOTMODE: &str = "InvalidParameterValue.InvalidBootMode";
pub const INVALIDPARAMETERVALUE_INVALIDBUCKETPERMISSIONFOREXPORT: &str = "InvalidParameterValue.InvalidBucketPermissionForExport";
pub const INVALIDPARAMETERVALUE_INVALIDFILENAMEPREFIXLIST: &str = "InvalidParameterValue.InvalidFileNamePrefixList";
pub const INVALIDPARAMETERVALUE_INVALIDGPUFAMILYCHANGE: &str = "InvalidParameterValue.InvalidGPUFamilyChange";
pub const INVALIDPARAMETERVALUE_INVALIDIMAGEFORGIVENINSTANCETYPE: &str = "InvalidParameterValue.InvalidImageForGivenInstanceType";
pub const INVALIDPARAMETERVALUE_INVALIDIMAGEFORMAT: &str = "InvalidParameterValue.InvalidImageFormat";
pub const INVALIDPARAMETERVALUE_INVALIDIMAGEID: &str = "InvalidParameterValue.InvalidImageId";
pub const INVALIDPARAMETERVALUE_INVALIDIMAGEIDFORRETSETINSTANCE: &str = "InvalidParameterValue.InvalidImageIdForRetsetInstance";
pub const INVALIDPARAMETERVALUE_INVALIDIMAGEIDISSHARED: &str = "InvalidParameterValue.InvalidImageIdIsShared";
pub const INVALIDPARAMETERVALUE_INVALIDIMAGEOSNAME: &str = "InvalidParameterValue.InvalidImageOsName";
pub const INVALIDPARAMETERVALUE_INVALIDIMAGESTATE: &str = "InvalidParameterValue.InvalidImageState";
pub const INVALIDPARAMETERVALUE_INVALIDINSTANCESOURCE: &str = "InvalidParameterValue.InvalidInstanceSource";
pub const INVALIDPARAMETERVALUE_INVALIDINSTANCETYPEUNDERWRITE: &str = "InvalidParameterValue.InvalidInstanceTypeUnderwrite";
pub const INVALIDPARAMETERVALUE_INVALIDIPFORMAT: &str = "InvalidParameterValue.InvalidIpFormat";
pub const INVALIDPARAMETERVALUE_INVALIDLAUNCHTEMPLATEDESCRIPTION: &str = "InvalidParameterValue.InvalidLaunchTemplateDescription";
pub const INVALIDPARAMETERVALUE_INVALIDLAUNCHTEMPLATENAME: &str = "InvalidParameterValue.InvalidLaunchTemplateName";
pub const INVALIDPARAMETERVALUE_INVALIDLAUNCHTEMPLATEVERSIONDESCRIPTION: &str = "InvalidParameterValue.InvalidLaunchTemplateVersionDescription";
pub const INVALIDPARAMETERVALUE_INVALIDLICENSETYPE: &str = "InvalidParameterValue.InvalidLicenseType";
pub const INVALIDPARAMETERVALUE_INVALIDPARAMETERVALUELIMIT: &str = "InvalidParameterValue.InvalidParameterValueLimit";
pub const INVALIDPARAMETERVALUE_INVALIDPASSWORD: &str = "InvalidParameterValue.InvalidPassword";
pub const INVALIDPARAMETERVALUE_INVALIDREGION: &str = "InvalidParameterValue.InvalidRegion";
pub const INVALIDPARAMETERVALUE_INVALIDTIMEFORMAT: &str = "InvalidParameterValue.InvalidTimeFormat";
pub const INVALIDPARAMETERVALUE_INVALIDUSERDATAFORMAT: &str = "InvalidParameterValue.InvalidUserDataFormat";
pub const INVALIDPARAMETERVALUE_INVALIDVAGUENAME: &str = "InvalidParameterValue.InvalidVagueName";
pub const INVALIDPARAMETERVALUE_IPADDRESSMALFORMED: &str = "InvalidParameterValue.IPAddressMalformed";
pub const INVALIDPARAMETERVALUE_IPV6ADDRESSMALFORMED: &str = "InvalidParameterValue.IPv6AddressMalformed";
pub const INVALIDPARAMETERVALUE_KEYPAIRNOTFOUND: &str = "InvalidParameterValue.KeyPairNotFound";
pub const INVALIDPARAMETERVALUE_KEYPAIRNOTSUPPORTED: &str = "InvalidParameterValue.KeyPairNotSupported";
pub const INVALIDPARAMETERVALUE_LAUNCHTEMPLATEDEFAULTVERSION: &str = "InvalidParameterValue.LaunchTemplateDefaultVersion";
pub const INVALIDPARAMETERVALUE_LAUNCHTEMPLATEIDMALFORMED: &str = "InvalidParameterValue.LaunchTemplateIdMalformed";
pub const INVALIDPARAMETERVALUE_LAUNCHTEMPLATEIDNOTEXISTED: &str = "InvalidParameterValue.LaunchTemplateIdNotExisted";
pub const INVALIDPARAMETERVALUE_LAUNCHTEMPLATEIDVERNOTEXISTED: &str = "InvalidParameterValue.LaunchTemplateIdVerNotExisted";
pub const INVALIDPARAMETERVALUE_LAUNCHTEMPLATEIDVERSETALREADY: &str = "InvalidParameterValue.LaunchTemplateIdVerSetAlready";
pub const INVALIDPARAMETERVALUE_LAUNCHTEMPLATENOTFOUND: &str = "InvalidParameterValue.LaunchTemplateNotFound";
pub const INVALIDPARAMETERVALUE_LAUNCHTEMPLATEVERSION: &str = "InvalidParameterValue.LaunchTemplateVersion";
pub const INVALIDPARAMETERVALUE_LIMITEXCEEDED: &str = "InvalidParameterValue.LimitExceeded";
pub const INVALIDPARAMETERVALUE_LOCALDISKSIZERANGE: &str = "InvalidParameterValue.LocalDiskSizeRange";
pub const INVALIDPARAMETERVALUE_MUSTDHCPENABLEDVPC: &str = "InvalidParameterValue.MustDhcpEnabledVpc";
pub const INVALIDPARAMETERVALUE_NOTCDCSUBNET: &str = "InvalidParameterValue.NotCdcSubnet";
pub const INVALIDPARAMETERVALUE_NOTEMPTY: &str = "InvalidParameterValue.NotEmpty";
pub const INVALIDPARAMETERVALUE_NOTSUPPORTED: &str = "InvalidParameterValue.NotSupported";
pub const INVALIDPARAMETERVALUE_PREHEATNOTSUPPORTEDINSTANCETYPE: &str = "InvalidParameterValue.PreheatNotSupportedInstanceType";
pub const INVALIDPARAMETERVALUE_PREHEATNOTSUPPORTEDZONE: &str = "InvalidParameterValue.PreheatNotSupportedZone";
pub const INVALIDPARAMETERVALUE_RANGE: &str = "InvalidParameterValue.Range";
pub const INVALIDPARAMETERVALUE_SNAPSHOTIDMALFORMED: &str = "InvalidParameterValue.SnapshotIdMalformed";
pub const INVALIDPARAMETERVALUE_SUBNETIDMALFORMED: &str = "InvalidParameterValue.SubnetIdMalformed";
pub const INVALIDPARAMETERVALUE_SUBNETNOTEXIST: &str = "InvalidParameterValue.SubnetNotExist";
pub const INVALIDPARAMETERVALUE_TAGKEYNOTFOUND: &str = "InvalidParameterValue.TagKeyNotFound";
pub const INVALIDPARAMETERVALUE_TAGQUOTALIMITEXCEEDED: &str = "InvalidParameterValue.TagQuotaLimitExceeded";
pub const INVALIDPARAMETERVALUE_THREADPERCOREVALUE: &str = "InvalidParameterValue.ThreadPerCoreValue";
pub const INVALIDPARAMETERVALUE_TOOLARGE: &str = "InvalidParameterValue.TooLarge";
pub const INVALIDPARAMETERVALUE_TOOLONG: &str = "InvalidParameterValue.TooLong";
pub const INVALIDPARAMETERVALUE_UUIDMALFORMED: &str = "InvalidParameterValue.UuidMalformed";
pub const INVALIDPARAMETERVALUE_VPCIDMALFORMED: &str = "InvalidParameterValue.VpcIdMalformed";
pub const INVALIDPARAMETERVALUE_VPCIDNOTEXIST: &str = "InvalidParameterValue.VpcIdNotExist";
pub const INVALIDPARAMETERVALUE_VPCIDZONEIDNOTMATCH: &str = "InvalidParameterValue.VpcIdZoneIdNotMatch";
pub const INVALIDPARAMETERVALUE_VPCNOTSUPPORTIPV6ADDRESS: &str = "InvalidParameterValue.VpcNotSupportIpv6Address";
pub const INVALIDPARAMETERVALUE_ZONENOTSUPPORTED: &str = "InvalidParameterValue.ZoneNotSupported";
pub const INVALIDPARAMETER_ATMOSTONE: &str = "InvalidParameter.AtMostOne";
pub const INVALIDPARAMETER_CDCNOTSUPPORTED: &str = "InvalidParameter.CdcNotSupported";
pub const INVALIDPARAMETER_DATADISKIDCONTAINSROOTDISK: &str = "InvalidParameter.DataDiskIdContainsRootDisk";
pub const INVALIDPARAMETER_DATADISKNOTBELONGSPECIFIEDINSTANCE: &str = "InvalidParameter.DataDiskNotBelongSpecifiedInstance";
pub const INVALIDPARAMETER_DUPLICATESYSTEMSNAPSHOTS: &str = "InvalidParameter.DuplicateSystemSnapshots";
pub const INVALIDPARAMETER_HOSTIDSTATUSNOTSUPPORT: &str = "InvalidParameter.HostIdStatusNotSupport";
pub const INVALIDPARAMETER_HOSTNAMEILLEGAL: &str = "InvalidParameter.HostNameIllegal";
pub const INVALIDPARAMETER_IMAGEIDSSNAPSHOTIDSMUSTONE: &str = "InvalidParameter.ImageIdsSnapshotIdsMustOne";
pub const INVALIDPARAMETER_INSTANCEIMAGENOTSUPPORT: &str = "InvalidParameter.InstanceImageNotSupport";
pub const INVALIDPARAMETER_INTERNETACCESSIBLENOTSUPPORTED: &str = "InvalidParameter.InternetAccessibleNotSupported";
pub const INVALIDPARAMETER_INVALIDCLOUDDISKSOLDOUT: &str = "InvalidParameter.InvalidCloudDiskSoldOut";
pub const INVALIDPARAMETER_INVALIDDEPENDENCE: &str = "InvalidParameter.InvalidDependence";
pub const INVALIDPARAMETER_INVALIDINSTANCENOTSUPPORTED: &str = "InvalidParameter.InvalidInstanceNotSupported";
pub const INVALIDPARAMETER_INVALIDIPFORMAT: &str = "InvalidParameter.InvalidIpFormat";
pub const INVALIDPARAMETER_INVALIDPARAMETERCOEXISTIMAGEIDSFILTERS: &str = "InvalidParameter.InvalidParameterCoexistImageIdsFilters";
pub const INVALIDPARAMETER_INVALIDPARAMETERURLERROR: &str = "InvalidParameter.InvalidParameterUrlError";
pub const INVALIDPARAMETER_LACKCORECOUNTORTHREADPERCORE: &str = "InvalidParameter.LackCoreCountOrThreadPerCore";
pub const INVALIDPARAMETER_LOCALDATADISKNOTSUPPORT: &str = "InvalidParameter.LocalDataDiskNotSupport";
pub const INVALIDPARAMETER_PARAMETERCONFLICT: &str = "InvalidParameter.ParameterConflict";
pub const INVALIDPARAMETER_PASSWORDNOTSUPPORTED: &str = "InvalidParameter.PasswordNotSupported";
pub const INVALIDPARAMETER_SNAPSHOTNOTFOUND: &str = "InvalidParameter.SnapshotNotFound";
pub const INVALIDPARAMETER_SPECIFYONEPARAMETER: &str = "InvalidParameter.SpecifyOneParameter";
pub const INVALIDPARAMETER_SWAPDISKNOTSUPPORT: &str = "InvalidParameter.SwapDiskNotSupport";
pub const INVALIDPARAMETER_SYSTEMSNAPSHOTNOTFOUND: &str = "InvalidParameter.SystemSnapshotNotFound";
pub const INVALIDPARAMETER_VALUETOOLARGE: &str = "InvalidParameter.ValueTooLarge";
pub const INVALIDPASSWORD: &str = "InvalidPassword";
pub const INVALIDPERIOD: &str = "InvalidPeriod";
pub const INVALIDPERMISSION: &str = "InvalidPermission";
pub const INVALIDPROJECTID_NOTFOUND: &str = "InvalidProjectId.NotFound";
pub const INVALIDPUBLICKEY_DUPLICATE: &str = "InvalidPublicKey.Duplicate";
pub const INVALIDPUBLICKEY_MALFORMED: &str = "InvalidPublicKey.Malformed";
pub const INVALIDREGION_NOTFOUND: &str = "InvalidRegion.NotFound";
pub const INVALIDREGION_UNAVAILABLE: &str = "InvalidRegion.Unavailable";
pub const INVALIDSECURITYGROUPID_NOTFOUND: &str = "InvalidSecurityGroupId.NotFound";
pub const INVALIDSGID_MALFORMED: &str = "InvalidSgId.Malformed";
pub const INVALIDZONE_MISMATCHREGION: &str = "InvalidZone.MismatchRegion";
pub const LIMITEXCEEDED_ASSOCIATEUSGLIMITEXCEEDED: &str = "LimitExceeded.AssociateUSGLimitExceeded";
pub const LIMITEXCEEDED_CVMSVIFSPERSECGROUPLIMITEXCEEDED: &str = "LimitExceeded.CvmsVifsPerSecGroupLimitExceeded";
pub const LIMITEXCEEDED_DISASTERRECOVERGROUP: &str = "LimitExceeded.DisasterRecoverGroup";
pub const LIMITEXCEEDED_EIPNUMLIMIT: &str = "LimitExceeded.EipNumLimit";
pub const LIMITEXCEEDED_ENINUMLIMIT: &str = "LimitExceeded.EniNumLimit";
pub const LIMITEXCEEDED_EXPORTIMAGETASKLIMITEXCEEDED: &str = "LimitExceeded.ExportImageTaskLimitExceeded";
pub const LIMITEXCEEDED_HPCCLUSTERQUOTA: &str = "LimitExceeded.HpcClusterQuota";
pub const LIMITEXCEEDED_INSTANCEENINUMLIMIT: &str = "LimitExceeded.InstanceEniNumLimit";
pub const LIMITEXCEEDED_INSTANCEQUOTA: &str = "LimitExceeded.InstanceQuota";
pub const LIMITEXCEEDED_INSTANCETYPEBANDWIDTH: &str = "LimitExceeded.InstanceTypeBandwidth";
pub const LIMITEXCEEDED_IPV6ADDRESSNUM: &str = "LimitExceeded.IPv6AddressNum";
pub const LIMITEXCEEDED_LAUNCHTEMPLATEQUOTA: &str = "LimitExceeded.LaunchTemplateQuota";
pub const LIMITEXCEEDED_LAUNCHTEMPLATEVERSIONQUOTA: &str = "LimitExceeded.LaunchTemplateVersionQuota";
pub const LIMITEXCEEDED_PREHEATIMAGESNAPSHOTOUTOFQUOTA: &str = "LimitExceeded.PreheatImageSnapshotOutOfQuota";
pub const LIMITEXCEEDED_PREPAYQUOTA: &str = "LimitExceeded.PrepayQuota";
pub const LIMITEXCEEDED_PREPAYUNDERWRITEQUOTA: &str = "LimitExceeded.PrepayUnderwriteQuota";
pub const LIMITEXCEEDED_SINGLEUSGQUOTA: &str = "LimitExceeded.SingleUSGQuota";
pub const LIMITEXCEEDED_SPOTQUOTA: &str = "LimitExceeded.SpotQuota";
pub const LIMITEXCEEDED_TAGRESOURCEQUOTA: &str = "LimitExceeded.TagResourceQuota";
pub const LIMITEXCEEDED_USERRETURNQUOTA: &str = "LimitExceeded.UserReturnQuota";
pub const LIMITEXCEEDED_USERSPOTQUOTA: &str = "LimitExceeded.UserSpotQuota";
pub const LIMITEXCEEDED_VPCSUBNETNUM: &str = "LimitExceeded.VpcSubnetNum";
pub const MISSINGPARAMETER: &str = "MissingParameter";
pub const MISSINGPARAMETER_ATLEASTONE: &str = "MissingParameter.AtLeastOne";
pub const MISSINGPARAMETER_DPDKINSTANCETYPEREQUIREDVPC: &str = "MissingParameter.DPDKInstanceTypeRequiredVPC";
pub const MISSINGPARAMETER_MONITORSERVICE: &str = "MissingParameter.MonitorService";
pub const MUTEXOPERATION_TASKRUNNING: &str = "MutexOperation.TaskRunning";
pub const OPERATIONDENIED_ACCOUNTNOTSUPPORTED: &str = "OperationDenied.AccountNotSupported";
pub const OPERATIONDENIED_CHCINSTALLCLOUDIMAGEWITHOUTDEPLOYNETWORK: &str = "OperationDenied.ChcInstallCloudImageWithoutDeployNetwork";
pub const OPERATIONDENIED_INNERUSERPROHIBITACTION: &str = "OperationDenied.InnerUserProhibitAction";
pub const OPERATIONDENIED_INSTANCEOPERATIONINPROGRESS: &str = "OperationDenied.InstanceOperationInProgress";
pub const OVERQUOTA: &str = "OverQuota";
pub const REGIONABILITYLIMIT_UNSUPPORTEDTOIMPORTIMAGE: &str = "RegionAbilityLimit.UnsupportedToImportImage";
pub const RESOURCEINSUFFICIENT_AVAILABILITYZONESOLDOUT: &str = "ResourceInsufficient.AvailabilityZoneSoldOut";
pub const RESOURCEINSUFFICIENT_CLOUDDISKSOLDOUT: &str = "ResourceInsufficient.CloudDiskSoldOut";
pub const RESOURCEINSUFFICIENT_CLOUDDISKUNAVAILABLE: &str = "ResourceInsufficient.CloudDiskUnavailable";
pub const RESOURCEINSUFFICIENT_DISASTERRECOVERGROUPCVMQUOTA: &str = "ResourceInsufficient.DisasterRecoverGroupCvmQuota";
pub const RESOURCEINSUFFICIENT_INSUFFICIENTGROUPQUOTA: &str = "ResourceInsufficient.InsufficientGroupQuota";
pub const RESOURCEINSUFFICIENT_SPECIFIEDINSTANCETYPE: &str = "ResourceInsufficient.SpecifiedInstanceType";
pub const RESOURCEINSUFFICIENT_ZONESOLDOUTFORSPECIFIEDINSTANCE: &str = "ResourceInsufficient.ZoneSoldOutForSpecifiedInstance";
pub const RESOURCEINUSE: &str = "ResourceInUse";
pub const RESOURCEINUSE_DISKROLLBACKING: &str = "ResourceInUse.DiskRollbacking";
pub const RESOURCEINUSE_HPCCLUSTER: &str = "ResourceInUse.HpcCluster";
pub const RESOURCENOTFOUND_HPCCLUSTER: &str = "ResourceNotFound.HpcCluster";
pub const RESOURCENOTFOUND_INVALIDPLACEMENTSET: &str = "ResourceNotFound.InvalidPlacementSet";
pub const RESOURCENOTFOUND_INVALIDZONEINSTANCETYPE: &str = "ResourceNotFound.InvalidZoneInstanceType";
pub const RESOURCENOTFOUND_NODEFAULTCBS: &str = "ResourceNotFound.NoDefaultCbs";
pub const RESOURCENOTFOUND_NODEFAULTCBSWITHREASON: &str = "ResourceNotFound.NoDefaultCbsWithReason";
pub const RESOURCESSOLDOUT_AVAILABLEZONE: &str = "ResourcesSoldOut.AvailableZone";
pub const RESOURCESSOLDOUT_EIPINSUFFICIENT: &str = "ResourcesSoldOut.EipInsufficient";
pub const RESOURCESSOLDOUT_SPECIFIEDINSTANCETYPE: &str = "ResourcesSoldOut.SpecifiedInstanceType";
pub const RESOURCEUNAVAILABLE_INSTANCETYPE: &str = "ResourceUnavailable.InstanceType";
pub const RESOURCEUNAVAILABLE_SNAPSHOTCREATING: &str = "ResourceUnavailable.SnapshotCreating";
pub const SECGROUPACTIONFAILURE: &str = "SecGroupActionFailure";
pub const UNAUTHORIZEDOPERATION: &str = "UnauthorizedOperation";
pub const UNAUTHORIZEDOPERATION_IMAGENOTBELONGTOACCOUNT: &str = "UnauthorizedOperation.ImageNotBelongToAccount";
pub const UNAUTHORIZEDOPERATION_INVALIDTOKEN: &str = "UnauthorizedOperation.InvalidToken";
pub const UNAUTHORIZEDOPERATION_MFAEXPIRED: &str = "UnauthorizedOperation.MFAExpired";
pub const UNAUTHORIZEDOPERATION_MFANOTFOUND: &str = "UnauthorizedOperation.MFANotFound";
pub const UNAUTHORIZEDOPERATION_PERMISSIONDENIED: &str = "UnauthorizedOperation.PermissionDenied";
pub const UNKNOWNPARAMETER: &str = "UnknownParameter";
pub const UNSUPPORTEDOPERATION: &str = "UnsupportedOperation";
pub const UNSUPPORTEDOPERATION_BANDWIDTHPACKAGEIDNOTSUPPORTED: &str = "UnsupportedOperation.BandwidthPackageIdNotSupported";
pub const UNSUPPORTEDOPERATION_DISKSNAPCREATETIMETOOOLD: &str = "UnsupportedOperation.DiskSnapCreateTimeTooOld";
pub const UNSUPPORTEDOPERATION_EDGEZONEINSTANCE: &str = "UnsupportedOperation.EdgeZoneInstance";
pub const UNSUPPORTEDOPERATION_EDGEZONENOTSUPPORTCLOUDDISK: &str = "UnsupportedOperation.EdgeZoneNotSupportCloudDisk";
pub const UNSUPPORTEDOPERATION_ELASTICNETWORKINTERFACE: &str = "UnsupportedOperation.ElasticNetworkInterface";
pub const UNSUPPORTEDOPERATION_ENCRYPTEDIMAGESNOTSUPPORTED: &str = "UnsupportedOperation.EncryptedImagesNotSupported";
pub const UNSUPPORTEDOPERATION_HETEROGENEOUSCHANGEINSTANCEFAMILY: &str = "UnsupportedOperation.HeterogeneousChangeInstanceFamily";
pub const UNSUPPORTEDOPERATION_HIBERNATIONFORNORMALINSTANCE: &str = "UnsupportedOperation.HibernationForNormalInstance";
pub const UNSUPPORTEDOPERATION_HIBERNATIONOSVERSION: &str = "UnsupportedOperation.HibernationOsVersion";
pub const UNSUPPORTEDOPERATION_IMAGETOOLARGEEXPORTUNSUPPORTED: &str = "UnsupportedOperation.ImageTooLargeExportUnsupported";
pub const UNSUPPORTEDOPERATION_INSTANCECHARGETYPE: &str = "UnsupportedOperation.InstanceChargeType";
pub const UNSUPPORTEDOPERATION_INSTANCEMIXEDPRICINGMODEL: &str = "UnsupportedOperation.InstanceMixedPricingModel";
pub const UNSUPPORTEDOPERATION_INSTANCEMIXEDZONETYPE: &str = "UnsupportedOperation.InstanceMixedZoneType";
pub const UNSUPPORTEDOPERATION_INSTANCEOSWINDOWS: &str = "UnsupportedOperation.InstanceOsWindows";
pub const UNSUPPORTEDOPERATION_INSTANCEREINSTALLFAILED: &str = "UnsupportedOperation.InstanceReinstallFailed";
pub const UNSUPPORTEDOPERATION_INSTANCESPROTECTED: &str = "UnsupportedOperation.InstancesProtected";
pub const UNSUPPORTEDOPERATION_INSTANCESTATEBANNING: &str = "UnsupportedOperation.InstanceStateBanning";
pub const UNSUPPORTEDOPERATION_INSTANCESTATECORRUPTED: &str = "UnsupportedOperation.InstanceStateCorrupted";
pub const UNSUPPORTEDOPERATION_INSTANCESTATEENTERRESCUEMODE: &str = "UnsupportedOperation.InstanceStateEnterRescueMode";
pub const UNSUPPORTEDOPERATION_INSTANCESTATEENTERSERVICELIVEMIGRATE: &str = "UnsupportedOperation.InstanceStateEnterServiceLiveMigrate";
pub const UNSUPPORTEDOPERATION_INSTANCESTATEEXITRESCUEMODE: &str = "UnsupportedOperation.InstanceStateExitRescueMode";
pub const UNSUPPORTEDOPERATION_INSTANCESTATEEXITSERVICELIVEMIGRATE: &str = "UnsupportedOperation.InstanceStateExitServiceLiveMigrate";
pub const UNSUPPORTEDOPERATION_INSTANCESTATEFREEZING: &str = "UnsupportedOperation.InstanceStateFreezing";
pub const UNSUPPORTEDOPERATION_INSTANCESTATEISOLATING: &str = "UnsupportedOperation.InstanceStateIsolating";
pub const UNSUPPORTEDOPERATION_INSTANCESTATELAUNCHFAILED: &str = "UnsupportedOperation.InstanceStateLaunchFailed";
pub const UNSUPPORTEDOPERATION_INSTANCESTATEPENDING: &str = "UnsupportedOperation.InstanceStatePending";
pub const UNSUPPORTEDOPERATION_INSTANCESTATEREBOOTING: &str = "UnsupportedOperation.InstanceStateRebooting";
pub const UNSUPPORTEDOPERATION_INSTANCESTATERESCUEMODE: &str = "UnsupportedOperation.InstanceStateRescueMode";
pub const UNSUPPORTEDOPERATION_INSTANCESTATERUNNING: &str = "UnsupportedOperation.InstanceStateRunning";
pub const UNSUPPORTEDOPERATION_INSTANCESTATESERVICELIVEMIGRATE: &str = "UnsupportedOperation.InstanceStateServiceLiveMigrate";
pub const UNSUPPORTEDOPERATION_INSTANCESTATESHUTDOWN: &str = "UnsupportedOperation.InstanceStateShutdown";
pub const UNSUPPORTEDOPERATION_INSTANCESTATESTARTING: &str = "UnsupportedOperation.InstanceStateStarting";
pub const UNSUPPORTEDOPERATION_INSTANCESTATESTOPPED: &str = "UnsupportedOperation.InstanceStateStopped";
pub const UNSUPPORTEDOPERATION_INSTANCESTATESTOPPING: &str = "UnsupportedOperation.InstanceStateStopping";
pub const UNSUPPORTEDOPERATION_INSTANCESTATETERMINATED: &str = "UnsupportedOperation.InstanceStateTerminated";
pub const UNSUPPORTEDOPERATION_INSTANCESTATETERMINATING: &str = "UnsupportedOperation.InstanceStateTerminating";
pub const UNSUPPORTEDOPERATION_INSUFFICIENTCLUSTERQUOTA: &str = "UnsupportedOperation.InsufficientClusterQuota";
pub const UNSUPPORTEDOPERATION_INVALIDDATADISK: &str = "UnsupportedOperation.InvalidDataDisk";
pub const UNSUPPORTEDOPERATION_INVALIDDISK: &str = "UnsupportedOperation.InvalidDisk";
pub const UNSUPPORTEDOPERATION_INVALIDDISKBACKUPQUOTA: &str = "UnsupportedOperation.InvalidDiskBackupQuota";
pub const UNSUPPORTEDOPERATION_INVALIDDISKFASTROLLBACK: &str = "UnsupportedOperation.InvalidDiskFastRollback";
pub const UNSUPPORTEDOPERATION_INVALIDIMAGELICENSETYPEFORRESET: &str = "UnsupportedOperation.InvalidImageLicenseTypeForReset";
pub const UNSUPPORTEDOPERATION_INVALIDINSTANCENOTSUPPORTEDPROTECTEDINSTANCE: &str = "UnsupportedOperation.InvalidInstanceNotSupportedProtectedInstance";
pub const UNSUPPORTEDOPERATION_INVALIDINSTANCEWITHSWAPDISK: &str = "UnsupportedOperation.InvalidInstanceWithSwapDisk";
pub const UNSUPPORTEDOPERATION_INVALIDPERMISSIONNONINTERNATIONALACCOUNT: &str = "UnsupportedOperation.InvalidPermissionNonInternationalAccount";
pub const UNSUPPORTEDOPERATION_INVALIDREGIONDISKENCRYPT: &str = "UnsupportedOperation.InvalidRegionDiskEncrypt";
pub const UNSUPPORTEDOPERATION_INVALIDZONE: &str = "UnsupportedOperation.InvalidZone";
pub const UNSUPPORTEDOPERATION_IPV6NOTSUPPORTVPCMIGRATE: &str = "UnsupportedOperation.IPv6NotSupportVpcMigrate";
pub const UNSUPPORTEDOPERATION_KEYPAIRUNSUPPORTEDWINDOWS: &str = "UnsupportedOperation.KeyPairUnsupportedWindows";
pub const UNSUPPORTEDOPERATION_LOCALDATADISKCHANGEINSTANCEFAMILY: &str = "UnsupportedOperation.LocalDataDiskChangeInstanceFamily";
pub const UNSUPPORTEDOPERATION_LOCALDISKMIGRATINGTOCLOUDDISK: &str = "UnsupportedOperation.LocalDiskMigratingToCloudDisk";
pub const UNSUPPORTEDOPERATION_MARKETIMAGEEXPORTUNSUPPORTED: &str = "UnsupportedOperation.MarketImageExportUnsupported";
pub const UNSUPPORTEDOPERATION_MODIFYENCRYPTIONNOTSUPPORTED: &str = "UnsupportedOperation.ModifyEncryptionNotSupported";
pub const UNSUPPORTEDOPERATION_MODIFYVPCWITHCLASSLINK: &str = "UnsupportedOperation.ModifyVPCWithClassLink";
pub const UNSUPPORTEDOPERATION_MODIFYVPCWITHCLB: &str = "UnsupportedOperation.ModifyVPCWithCLB";
pub const UNSUPPORTEDOPERATION_NOINSTANCETYPESUPPORTSPOT: &str = "UnsupportedOperation.NoInstanceTypeSupportSpot";
pub const UNSUPPORTEDOPERATION_NOTFPGAINSTANCE: &str = "UnsupportedOperation.NotFpgaInstance";
pub const UNSUPPORTEDOPERATION_NOTSUPPORTIMPORTINSTANCESACTIONTIMER: &str = "UnsupportedOperation.NotSupportImportInstancesActionTimer";
pub const UNSUPPORTEDOPERATION_NOTSUPPORTINSTANCEIMAGE: &str = "UnsupportedOperation.NotSupportInstanceImage";
pub const UNSUPPORTEDOPERATION_NOVPCNETWORK: &str = "UnsupportedOperation.NoVpcNetwork";
pub const UNSUPPORTEDOPERATION_ONLYFORPREPAIDACCOUNT: &str = "UnsupportedOperation.OnlyForPrepaidAccount";
pub const UNSUPPORTEDOPERATION_ORIGINALINSTANCETYPEINVALID: &str = "UnsupportedOperation.OriginalInstanceTypeInvalid";
pub const UNSUPPORTEDOPERATION_PREHEATIMAGE: &str = "UnsupportedOperation.PreheatImage";
pub const UNSUPPORTEDOPERATION_PUBLICIMAGEEXPORTUNSUPPORTED: &str = "UnsupportedOperation.PublicImageExportUnsupported";
pub const UNSUPPORTEDOPERATION_RAWLOCALDISKINSREINSTALLTOQCOW2: &str = "UnsupportedOperation.RawLocalDiskInsReinstalltoQcow2";
pub const UNSUPPORTEDOPERATION_REDHATIMAGEEXPORTUNSUPPORTED: &str = "UnsupportedOperation.RedHatImageExportUnsupported";
pub const UNSUPPORTEDOPERATION_REDHATINSTANCETERMINATEUNSUPPORTED: &str = "UnsupportedOperation.RedHatInstanceTerminateUnsupported";
pub const UNSUPPORTEDOPERATION_REDHATINSTANCEUNSUPPORTED: &str = "UnsupportedOperation.RedHatInstanceUnsupported";
pub const UNSUPPORTEDOPERATION_REGION: &str = "UnsupportedOperation.Region";
pub const UNSUPPORTEDOPERATION_RESERVEDINSTANCEINVISIBLEFORUSER: &str = "UnsupportedOperation.ReservedInstanceInvisibleForUser";
pub const UNSUPPORTEDOPERATION_RESERVEDINSTANCEOUTOFQUATA: &str = "UnsupportedOperation.ReservedInstanceOutofQuata";
pub const UNSUPPORTEDOPERATION_SHAREDIMAGEEXPORTUNSUPPORTED: &str = "UnsupportedOperation.SharedImageExportUnsupported";
pub const UNSUPPORTEDOPERATION_SPECIALINSTANCETYPE: &str = "UnsupportedOperation.SpecialInstanceType";
pub const UNSUPPORTEDOPERATION_SPOTUNSUPPORTEDREGION: &str = "UnsupportedOperation.SpotUnsupportedRegion";
pub const UNSUPPORTEDOPERATION_STOPPEDMODESTOPCHARGING: &str = "UnsupportedOperation.StoppedModeStopCharging";
pub const UNSUPPORTEDOPERATION_STOPPEDMODESTOPCHARGINGSAMEFAMILY: &str = "UnsupportedOperation.StoppedModeStopChargingSameFamily";
pub const UNSUPPORTEDOPERATION_SYSTEMDISKTYPE: &str = "UnsupportedOperation.SystemDiskType";
pub const UNSUPPORTEDOPERATION_UNDERWRITEDISCOUNTGREATERTHANPREPAIDDISCOUNT: &str = "UnsupportedOperation.UnderwriteDiscountGreaterThanPrepaidDiscount";
pub const UNSUPPORTEDOPERATION_UNDERWRITINGINSTANCETYPEONLYSUPPORTAUTORENEW: &str = "UnsupportedOperation.UnderwritingInstanceTypeOnlySupportAutoRenew";
pub const UNSUPPORTEDOPERATION_UNSUPPORTEDARMCHANGEINSTANCEFAMILY: &str = "UnsupportedOperation.UnsupportedARMChangeInstanceFamily";
pub const UNSUPPORTEDOPERATION_UNSUPPORTEDCHANGEINSTANCEFAMILY: &str = "UnsupportedOperation.UnsupportedChangeInstanceFamily";
pub const UNSUPPORTEDOPERATION_UNSUPPORTEDCHANGEINSTANCEFAMILYTOARM: &str = "UnsupportedOperation.UnsupportedChangeInstanceFamilyToARM";
pub const UNSUPPORTEDOPERATION_UNSUPPORTEDCHANGEINSTANCEFAMILYTOSA3: &str = "UnsupportedOperation.UnsupportedChangeInstanceFamilyToSA3";
pub const UNSUPPORTEDOPERATION_UNSUPPORTEDCHANGEINSTANCETOTHISINSTANCEFAMILY: &str = "UnsupportedOperation.UnsupportedChangeInstanceToThisInstanceFamily";
pub const UNSUPPORTEDOPERATION_UNSUPPORTEDINTERNATIONALUSER: &str = "UnsupportedOperation.UnsupportedInternationalUser";
pub const UNSUPPORTEDOPERATION_USERLIMITOPERATIONEXCEEDQUOTA: &str = "UnsupportedOperation.UserLimitOperationExceedQuota";
pub const UNSUPPORTEDOPERATION_WINDOWSIMAGEEXPORTUNSUPPORTED: &str = "UnsupportedOperation.WindowsImageExportUnsupported";
pub const VPCADDRNOTINSUBNET: &str = "VpcAddrNotInSubNet";
pub const VPCIPISUSED: &str = "VpcIpIsUsed";

/// All the error codes in this module.
pub const ALL: &[&str] = &[
    ACCOUNTQUALIFICATIONRESTRICTIONS,
    AUTHFAILURE_CAMROLENAMEAUTHENTICATEFAILED,
    ENINOTALLOWEDCHANGESUBNET,
    FAILEDOPERATION_ACCOUNTALREADYEXISTS,
    FAILEDOPERATION_ACCOUNTISYOURSELF,
    FAILEDOPERATION_BYOLIMAGESHAREFAILED,
    FAILEDOPERATION_DISASTERRECOVERGROUPNOTFOUND,
    FAILEDOPERATION_ILLEGALTAGKEY,
    FAILEDOPERATION_ILLEGALTAGVALUE,
    FAILEDOPERATION_INQUIRYPRICEFAILED,
    FAILEDOPERATION_INQUIRYREFUNDPRICEFAILED,
    FAILEDOPERATION_INVALIDIMAGESTATE,
    FAILEDOPERATION_INVALIDINSTANCEAPPLICATIONROLEEMR,
    FAILEDOPERATION_NOAVAILABLEIPADDRESSCOUNTINSUBNET,
    FAILEDOPERATION_NOTFOUNDEIP,
    FAILEDOPERATION_NOTMASTERACCOUNT,
    FAILEDOPERATION_PLACEMENTSETNOTEMPTY,
    FAILEDOPERATION_PROMOTIONALPERIORESTRICTION,
    FAILEDOPERATION_PROMOTIONALREGIONRESTRICTION,
    FAILEDOPERATION_QIMAGESHAREFAILED,
    FAILEDOPERATION_RIMAGESHAREFAILED,
    FAILEDOPERATION_SECURITYGROUPACTIONFAILED,
    FAILEDOPERATION_SNAPSHOTSIZELARGERTHANDATASIZE,
    FAILEDOPERATION_SNAPSHOTSIZELESSTHANDATASIZE,
    FAILEDOPERATION_TAGKEYRESERVED,
    FAILEDOPERATION_TATAGENTNOTSUPPORT,
    FAILEDOPERATION_UNRETURNABLE,
    IMAGEQUOTALIMITEXCEEDED,
    INSTANCESQUOTALIMITEXCEEDED,
    INTERNALERROR,
    INTERNALERROR_TRADEUNKNOWNERROR,
    INTERNALSERVERERROR,
    INVALIDACCOUNTID_NOTFOUND,
    INVALIDACCOUNTIS_YOURSELF,
    INVALIDACCOUNT_INSUFFICIENTBALANCE,
    INVALIDACCOUNT_UNPAIDORDER,
    INVALIDCLIENTTOKEN_TOOLONG,
    INVALIDFILTER,
    INVALIDFILTERVALUE_LIMITEXCEEDED,
    INVALIDHOSTID_MALFORMED,
    INVALIDHOSTID_NOTFOUND,
    INVALIDHOST_NOTSUPPORTED,
    INVALIDIMAGEID_INCORRECTSTATE,
    INVALIDIMAGEID_INSHARED,
    INVALIDIMAGEID_MALFORMED,
    INVALIDIMAGEID_NOTFOUND,
    INVALIDIMAGEID_TOOLARGE,
    INVALIDIMAGENAME_DUPLICATE,
    INVALIDIMAGEOSTYPE_UNSUPPORTED,
    INVALIDIMAGEOSVERSION_UNSUPPORTED,
    INVALIDINSTANCEID_MALFORMED,
    INVALIDINSTANCEID_NOTFOUND,
    INVALIDINSTANCENAME_TOOLONG,
    INVALIDINSTANCENOTSUPPORTEDPREPAIDINSTANCE,
    INVALIDINSTANCESTATE,
    INVALIDINSTANCETYPE_MALFORMED,
    INVALIDINSTANCE_NOTSUPPORTED,
    INVALIDKEYPAIRID_MALFORMED,
    INVALIDKEYPAIRID_NOTFOUND,
    INVALIDKEYPAIRNAMEEMPTY,
    INVALIDKEYPAIRNAMEINCLUDEILLEGALCHAR,
    INVALIDKEYPAIRNAMETOOLONG,
    INVALIDKEYPAIRNAME_DUPLICATE,
    INVALIDKEYPAIR_LIMITEXCEEDED,
    INVALIDPARAMETER,
    INVALIDPARAMETERCOMBINATION,
    INVALIDPARAMETERCONFLICT,
    INVALIDPARAMETERVALUE,
    INVALIDPARAMETERVALUELIMIT,
    INVALIDPARAMETERVALUEOFFSET,
    INVALIDPARAMETERVALUE_AMOUNTNOTEQUAL,
    INVALIDPARAMETERVALUE_BANDWIDTHPACKAGEIDMALFORMED,
    INVALIDPARAMETERVALUE_BANDWIDTHPACKAGEIDNOTFOUND,
    INVALIDPARAMETERVALUE_BASICNETWORKINSTANCEFAMILY,
    INVALIDPARAMETERVALUE_BUCKETNOTFOUND,
    INVALIDPARAMETERVALUE_CAMROLENAMEMALFORMED,
    INVALIDPARAMETERVALUE_CDHONLYLOCALDATADISKRESIZE,
    INVALIDPARAMETERVALUE_CHCHOSTSNOTFOUND,
    INVALIDPARAMETERVALUE_CHCNETWORKEMPTY,
    INVALIDPARAMETERVALUE_CLOUDSSDDATADISKSIZETOOSMALL,
    INVALIDPARAMETERVALUE_CORECOUNTVALUE,
    INVALIDPARAMETERVALUE_DEDICATEDCLUSTERNOTSUPPORTEDCHARGETYPE,
    INVALIDPARAMETERVALUE_DEPLOYVPCALREADYEXISTS,
    INVALIDPARAMETERVALUE_DISASTERRECOVERGROUPIDMALFORMED,
    INVALIDPARAMETERVALUE_DUPLICATE,
    INVALIDPARAMETERVALUE_DUPLICATETAGS,
    INVALIDPARAMETERVALUE_GPUINSTANCEFAMILY,
    INVALIDPARAMETERVALUE_HPCCLUSTERIDZONEIDNOTMATCH,
    INVALIDPARAMETERVALUE_ILLEGALHOSTNAME,
    INVALIDPARAMETERVALUE_INCORRECTFORMAT,
    INVALIDPARAMETERVALUE_INSTANCEIDMALFORMED,
    INVALIDPARAMETERVALUE_INSTANCENOTSUPPORTEDMIXPRICINGMODEL,
    INVALIDPARAMETERVALUE_INSTANCETYPENOTFOUND,
    INVALIDPARAMETERVALUE_INSTANCETYPENOTSUPPORTHPCCLUSTER,
    INVALIDPARAMETERVALUE_INSTANCETYPEREQUIREDHPCCLUSTER,
    INVALIDPARAMETERVALUE_INSUFFICIENTOFFERING,
    INVALIDPARAMETERVALUE_INSUFFICIENTPRICE,
    INVALIDPARAMETERVALUE_INVALIDAPPIDFORMAT,
    INVALIDPARAMETERVALUE_INVALIDBOOTMODE,
    INVALIDPARAMETERVALUE_INVALIDBUCKETPERMISSIONFOREXPORT,
    INVALIDPARAMETERVALUE_INVALIDFILENAMEPREFIXLIST,
    INVALIDPARAMETERVALUE_INVALIDGPUFAMILYCHANGE,
    INVALIDPARAMETERVALUE_INVALIDIMAGEFORGIVENINSTANCETYPE,
    INVALIDPARAMETERVALUE_INVALIDIMAGEFORMAT,
    INVALIDPARAMETERVALUE_INVALIDIMAGEID,
    INVALIDPARAMETERVALUE_INVALIDIMAGEIDFORRETSETINSTANCE,
    INVALIDPARAMETERVALUE_INVALIDIMAGEIDISSHARED,
    INVALIDPARAMETERVALUE_INVALIDIMAGEOSNAME,
    INVALIDPARAMETERVALUE_INVALIDIMAGESTATE,
    INVALIDPARAMETERVALUE_INVALIDINSTANCESOURCE,
    INVALIDPARAMETERVALUE_INVALIDINSTANCETYPEUNDERWRITE,
    INVALIDPARAMETERVALUE_INVALIDIPFORMAT,
    INVALIDPARAMETERVALUE_INVALIDLAUNCHTEMPLATEDESCRIPTION,
    INVALIDPARAMETERVALUE_INVALIDLAUNCHTEMPLATENAME,
    INVALIDPARAMETERVALUE_INVALIDLAUNCHTEMPLATEVERSIONDESCRIPTION,
    INVALIDPARAMETERVALUE_INVALIDLICENSETYPE,
    INVALIDPARAMETERVALUE_INVALIDPARAMETERVALUELIMIT,
    INVALIDPARAMETERVALUE_INVALIDPASSWORD,
    INVALIDPARAMETERVALUE_INVALIDREGION,
    INVALIDPARAMETERVALUE_INVALIDTIMEFORMAT,
    INVALIDPARAMETERVALUE_INVALIDUSERDATAFORMAT,
    INVALIDPARAMETERVALUE_INVALIDVAGUENAME,
    INVALIDPARAMETERVALUE_IPADDRESSMALFORMED,
    INVALIDPARAMETERVALUE_IPV6ADDRESSMALFORMED,
    INVALIDPARAMETERVALUE_KEYPAIRNOTFOUND,
    INVALIDPARAMETERVALUE_KEYPAIRNOTSUPPORTED,
    INVALIDPARAMETERVALUE_LAUNCHTEMPLATEDEFAULTVERSION,
    INVALIDPARAMETERVALUE_LAUNCHTEMPLATEIDMALFORMED,
    INVALIDPARAMETERVALUE_LAUNCHTEMPLATEIDNOTEXISTED,
    INVALIDPARAMETERVALUE_LAUNCHTEMPLATEIDVERNOTEXISTED,
    INVALIDPARAMETERVALUE_LAUNCHTEMPLATEIDVERSETALREADY,
    INVALIDPARAMETERVALUE_LAUNCHTEMPLATENOTFOUND,
    INVALIDPARAMETERVALUE_LAUNCHTEMPLATEVERSION,
    INVALIDPARAMETERVALUE_LIMITEXCEEDED,
    INVALIDPARAMETERVALUE_LOCALDISKSIZERANGE,
    INVALIDPARAMETERVALUE_MUSTDHCPENABLEDVPC,
    INVALIDPARAMETERVALUE_NOTCDCSUBNET,
    INVALIDPARAMETERVALUE_NOTEMPTY,
    INVALIDPARAMETERVALUE_NOTSUPPORTED,
    INVALIDPARAMETERVALUE_PREHEATNOTSUPPORTEDINSTANCETYPE,
    INVALIDPARAMETERVALUE_PREHEATNOTSUPPORTEDZONE,
    INVALIDPARAMETERVALUE_RANGE,
    INVALIDPARAMETERVALUE_SNAPSHOTIDMALFORMED,
    INVALIDPARAMETERVALUE_SUBNETIDMALFORMED,
    INVALIDPARAMETERVALUE_SUBNETNOTEXIST,
    INVALIDPARAMETERVALUE_TAGKEYNOTFOUND,
    INVALIDPARAMETERVALUE_TAGQUOTALIMITEXCEEDED,
    INVALIDPARAMETERVALUE_THREADPERCOREVALUE,
    INVALIDPARAMETERVALUE_TOOLARGE,
    INVALIDPARAMETERVALUE_TOOLONG,
    INVALIDPARAMETERVALUE_UUIDMALFORMED,
    INVALIDPARAMETERVALUE_VPCIDMALFORMED,
    INVALIDPARAMETERVALUE_VPCIDNOTEXIST,
    INVALIDPARAMETERVALUE_VPCIDZONEIDNOTMATCH,
    INVALIDPARAMETERVALUE_VPCNOTSUPPORTIPV6ADDRESS,
    INVALIDPARAMETERVALUE_ZONENOTSUPPORTED,
    INVALIDPARAMETER_ATMOSTONE,
    INVALIDPARAMETER_CDCNOTSUPPORTED,
    INVALIDPARAMETER_DATADISKIDCONTAINSROOTDISK,
    INVALIDPARAMETER_DATADISKNOTBELONGSPECIFIEDINSTANCE,
    INVALIDPARAMETER_DUPLICATESYSTEMSNAPSHOTS,
    INVALIDPARAMETER_HOSTIDSTATUSNOTSUPPORT,
    INVALIDPARAMETER_HOSTNAMEILLEGAL,
    INVALIDPARAMETER_IMAGEIDSSNAPSHOTIDSMUSTONE,
    INVALIDPARAMETER_INSTANCEIMAGENOTSUPPORT,
    INVALIDPARAMETER_INTERNETACCESSIBLENOTSUPPORTED,
    INVALIDPARAMETER_INVALIDCLOUDDISKSOLDOUT,
    INVALIDPARAMETER_INVALIDDEPENDENCE,
    INVALIDPARAMETER_INVALIDINSTANCENOTSUPPORTED,
    INVALIDPARAMETER_INVALIDIPFORMAT,
    INVALIDPARAMETER_INVALIDPARAMETERCOEXISTIMAGEIDSFILTERS,
    INVALIDPARAMETER_INVALIDPARAMETERURLERROR,
    INVALIDPARAMETER_LACKCORECOUNTORTHREADPERCORE,
    INVALIDPARAMETER_LOCALDATADISKNOTSUPPORT,
    INVALIDPARAMETER_PARAMETERCONFLICT,
    INVALIDPARAMETER_PASSWORDNOTSUPPORTED,
    INVALIDPARAMETER_SNAPSHOTNOTFOUND,
    INVALIDPARAMETER_SPECIFYONEPARAMETER,
    INVALIDPARAMETER_SWAPDISKNOTSUPPORT,
    INVALIDPARAMETER_SYSTEMSNAPSHOTNOTFOUND,
    INVALIDPARAMETER_VALUETOOLARGE,
    INVALIDPASSWORD,
    INVALIDPERIOD,
    INVALIDPERMISSION,
    INVALIDPROJECTID_NOTFOUND,
    INVALIDPUBLICKEY_DUPLICATE,
    INVALIDPUBLICKEY_MALFORMED,
    INVALIDREGION_NOTFOUND,
    INVALIDREGION_UNAVAILABLE,
    INVALIDSECURITYGROUPID_NOTFOUND,
    INVALIDSGID_MALFORMED,
    INVALIDZONE_MISMATCHREGION,
    LIMITEXCEEDED_ASSOCIATEUSGLIMITEXCEEDED,
    LIMITEXCEEDED_CVMSVIFSPERSECGROUPLIMITEXCEEDED,
    LIMITEXCEEDED_DISASTERRECOVERGROUP,
    LIMITEXCEEDED_EIPNUMLIMIT,
    LIMITEXCEEDED_ENINUMLIMIT,
    LIMITEXCEEDED_EXPORTIMAGETASKLIMITEXCEEDED,
    LIMITEXCEEDED_HPCCLUSTERQUOTA,
    LIMITEXCEEDED_INSTANCEENINUMLIMIT,
    LIMITEXCEEDED_INSTANCEQUOTA,
    LIMITEXCEEDED_INSTANCETYPEBANDWIDTH,
    LIMITEXCEEDED_IPV6ADDRESSNUM,
    LIMITEXCEEDED_LAUNCHTEMPLATEQUOTA,
    LIMITEXCEEDED_LAUNCHTEMPLATEVERSIONQUOTA,
    LIMITEXCEEDED_PREHEATIMAGESNAPSHOTOUTOFQUOTA,
    LIMITEXCEEDED_PREPAYQUOTA,
    LIMITEXCEEDED_PREPAYUNDERWRITEQUOTA,
    LIMITEXCEEDED_SINGLEUSGQUOTA,
    LIMITEXCEEDED_SPOTQUOTA,
    LIMITEXCEEDED_TAGRESOURCEQUOTA,
    LIMITEXCEEDED_USERRETURNQUOTA,
    LIMITEXCEEDED_USERSPOTQUOTA,
    LIMITEXCEEDED_VPCSUBNETNUM,
    MISSINGPARAMETER,
    MISSINGPARAMETER_ATLEASTONE,
    MISSINGPARAMETER_DPDKINSTANCETYPEREQUIREDVPC,
    MISSINGPARAMETER_MONITORSERVICE,
    MUTEXOPERATION_TASKRUNNING,
    OPERATIONDENIED_ACCOUNTNOTSUPPORTED,
    OPERATIONDENIED_CHCINSTALLCLOUDIMAGEWITHOUTDEPLOYNETWORK,
    OPERATIONDENIED_INNERUSERPROHIBITACTION,
    OPERATIONDENIED_INSTANCEOPERATIONINPROGRESS,
    OVERQUOTA,
    REGIONABILITYLIMIT_UNSUPPORTEDTOIMPORTIMAGE,
    RESOURCEINSUFFICIENT_AVAILABILITYZONESOLDOUT,
    RESOURCEINSUFFICIENT_CLOUDDISKSOLDOUT,
    RESOURCEINSUFFICIENT_CLOUDDISKUNAVAILABLE,
    RESOURCEINSUFFICIENT_DISASTERRECOVERGROUPCVMQUOTA,
    RESOURCEINSUFFICIENT_INSUFFICIENTGROUPQUOTA,
    RESOURCEINSUFFICIENT_SPECIFIEDINSTANCETYPE,
    RESOURCEINSUFFICIENT_ZONESOLDOUTFORSPECIFIEDINSTANCE,
    RESOURCEINUSE,
    RESOURCEINUSE_DISKROLLBACKING,
    RESOURCEINUSE_HPCCLUSTER,
    RESOURCENOTFOUND_HPCCLUSTER,
    RESOURCENOTFOUND_INVALIDPLACEMENTSET,
    RESOURCENOTFOUND_INVALIDZONEINSTANCETYPE,
    RESOURCENOTFOUND_NODEFAULTCBS,
    RESOURCENOTFOUND_NODEFAULTCBSWITHREASON,
    RESOURCESSOLDOUT_AVAILABLEZONE,
    RESOURCESSOLDOUT_EIPINSUFFICIENT,
    RESOURCESSOLDOUT_SPECIFIEDINSTANCETYPE,
    RESOURCEUNAVAILABLE_INSTANCETYPE,
    RESOURCEUNAVAILABLE_SNAPSHOTCREATING,
    SECGROUPACTIONFAILURE,
    UNAUTHORIZEDOPERATION,
    UNAUTHORIZEDOPERATION_IMAGENOTBELONGTOACCOUNT,
    UNAUTHORIZEDOPERATION_INVALIDTOKEN,
    UNAUTHORIZEDOPERATION_MFAEXPIRED,
    UNAUTHORIZEDOPERATION_MFANOTFOUND,
    UNAUTHORIZEDOPERATION_PERMISSIONDENIED,
    UNKNOWNPARAMETER,
    UNSUPPORTEDOPERATION,
    UNSUPPORTEDOPERATION_BANDWIDTHPACKAGEIDNOTSUPPORTED,
    UNSUPPORTEDOPERATION_DISKSNAPCREATETIMETOOOLD,
    UNSUPPORTEDOPERATION_EDGEZONEINSTANCE,
    UNSUPPORTEDOPERATION_EDGEZONENOTSUPPORTCLOUDDISK,
    UNSUPPORTEDOPERATION_ELASTICNETWORKINTERFACE,
    UNSUPPORTEDOPERATION_ENCRYPTEDIMAGESNOTSUPPORTED,
    UNSUPPORTEDOPERATION_HETEROGENEOUSCHANGEINSTANCEFAMILY,
    UNSUPPORTEDOPERATION_HIBERNATIONFORNORMALINSTANCE,
    UNSUPPORTEDOPERATION_HIBERNATIONOSVERSION,
    UNSUPPORTEDOPERATION_IMAGETOOLARGEEXPORTUNSUPPORTED,
    UNSUPPORTEDOPERATION_INSTANCECHARGETYPE,
    UNSUPPORTEDOPERATION_INSTANCEMIXEDPRICINGMODEL,
    UNSUPPORTEDOPERATION_INSTANCEMIXEDZONETYPE,
    UNSUPPORTEDOPERATION_INSTANCEOSWINDOWS,
    UNSUPPORTEDOPERATION_INSTANCEREINSTALLFAILED,
    UNSUPPORTEDOPERATION_INSTANCESPROTECTED,
    UNSUPPORTEDOPERATION_INSTANCESTATEBANNING,
    UNSUPPORTEDOPERATION_INSTANCESTATECORRUPTED,
    UNSUPPORTEDOPERATION_INSTANCESTATEENTERRESCUEMODE,
    UNSUPPORTEDOPERATION_INSTANCESTATEENTERSERVICELIVEMIGRATE,
    UNSUPPORTEDOPERATION_INSTANCESTATEEXITRESCUEMODE,
    UNSUPPORTEDOPERATION_INSTANCESTATEEXITSERVICELIVEMIGRATE,
    UNSUPPORTEDOPERATION_INSTANCESTATEFREEZING,
    UNSUPPORTEDOPERATION_INSTANCESTATEISOLATING,
    UNSUPPORTEDOPERATION_INSTANCESTATELAUNCHFAILED,
    UNSUPPORTEDOPERATION_INSTANCESTATEPENDING,
    UNSUPPORTEDOPERATION_INSTANCESTATEREBOOTING,
    UNSUPPORTEDOPERATION_INSTANCESTATERESCUEMODE,
    UNSUPPORTEDOPERATION_INSTANCESTATERUNNING,
    UNSUPPORTEDOPERATION_INSTANCESTATESERVICELIVEMIGRATE,
    UNSUPPORTEDOPERATION_INSTANCESTATESHUTDOWN,
    UNSUPPORTEDOPERATION_INSTANCESTATESTARTING,
    UNSUPPORTEDOPERATION_INSTANCESTATESTOPPED,
    UNSUPPORTEDOPERATION_INSTANCESTATESTOPPING,
    UNSUPPORTEDOPERATION_INSTANCESTATETERMINATED,
    UNSUPPORTEDOPERATION_INSTANCESTATETERMINATING,
    UNSUPPORTEDOPERATION_INSUFFICIENTCLUSTERQUOTA,
    UNSUPPORTEDOPERATION_INVALIDDATADISK,
    UNSUPPORTEDOPERATION_INVALIDDISK,
    UNSUPPORTEDOPERATION_INVALIDDISKBACKUPQUOTA,
    UNSUPPORTEDOPERATION_INVALIDDISKFASTROLLBACK,
    UNSUPPORTEDOPERATION_INVALIDIMAGELICENSETYPEFORRESET,
    UNSUPPORTEDOPERATION_INVALIDINSTANCENOTSUPPORTEDPROTECTEDINSTANCE,
    UNSUPPORTEDOPERATION_INVALIDINSTANCEWITHSWAPDISK,
    UNSUPPORTEDOPERATION_INVALIDPERMISSIONNONINTERNATIONALACCOUNT,
    UNSUPPORTEDOPERATION_INVALIDREGIONDISKENCRYPT,
    UNSUPPORTEDOPERATION_INVALIDZONE,
    UNSUPPORTEDOPERATION_IPV6NOTSUPPORTVPCMIGRATE,
    UNSUPPORTEDOPERATION_KEYPAIRUNSUPPORTEDWINDOWS,
    UNSUPPORTEDOPERATION_LOCALDATADISKCHANGEINSTANCEFAMILY,
    UNSUPPORTEDOPERATION_LOCALDISKMIGRATINGTOCLOUDDISK,
    UNSUPPORTEDOPERATION_MARKETIMAGEEXPORTUNSUPPORTED,
    UNSUPPORTEDOPERATION_MODIFYENCRYPTIONNOTSUPPORTED,
    UNSUPPORTEDOPERATION_MODIFYVPCWITHCLASSLINK,
    UNSUPPORTEDOPERATION_MODIFYVPCWITHCLB,
    UNSUPPORTEDOPERATION_NOINSTANCETYPESUPPORTSPOT,
    UNSUPPORTEDOPERATION_NOTFPGAINSTANCE,
    UNSUPPORTEDOPERATION_NOTSUPPORTIMPORTINSTANCESACTIONTIMER,
    UNSUPPORTEDOPERATION_NOTSUPPORTINSTANCEIMAGE,
    UNSUPPORTEDOPERATION_NOVPCNETWORK,
    UNSUPPORTEDOPERATION_ONLYFORPREPAIDACCOUNT,
    UNSUPPORTEDOPERATION_ORIGINALINSTANCETYPEINVALID,
    UNSUPPORTEDOPERATION_PREHEATIMAGE,
    UNSUPPORTEDOPERATION_PUBLICIMAGEEXPORTUNSUPPORTED,
    UNSUPPORTEDOPERATION_RAWLOCALDISKINSREINSTALLTOQCOW2,
    UNSUPPORTEDOPERATION_REDHATIMAGEEXPORTUNSUPPORTED,
    UNSUPPORTEDOPERATION_REDHATINSTANCETERMINATEUNSUPPORTED,
    UNSUPPORTEDOPERATION_REDHATINSTANCEUNSUPPORTED,
    UNSUPPORTEDOPERATION_REGION,
    UNSUPPORTEDOPERATION_RESERVEDINSTANCEINVISIBLEFORUSER,
    UNSUPPORTEDOPERATION_RESERVEDINSTANCEOUTOFQUATA,
    UNSUPPORTEDOPERATION_SHAREDIMAGEEXPORTUNSUPPORTED,
    UNSUPPORTEDOPERATION_SPECIALINSTANCETYPE,
    UNSUPPORTEDOPERATION_SPOTUNSUPPORTEDREGION,
    UNSUPPORTEDOPERATION_STOPPEDMODESTOPCHARGING,
    UNSUPPORTEDOPERATION_STOPPEDMODESTOPCHARGINGSAMEFAMILY,
    UNSUPPORTEDOPERATION_SYSTEMDISKTYPE,
    UNSUPPORTEDOPERATION_UNDERWRITEDISCOUNTGREATERTHANPREPAIDDISCOUNT,
    UNSUPPORTEDOPERATION_UNDERWRITINGINSTANCETYPEONLYSUPPORTAUTORENEW,
    UNSUPPORTEDOPERATION_UNSUPPORTEDARMCHANGEINSTANCEFAMILY,
    UNSUPPORTEDOPERATION_UNSUPPORTEDCHANGEINSTANCEFAMILY,
    UNSUPPORTEDOPERATION_UNSUPPORTEDCHANGEINSTANCEFAMILYTOARM,
    UNSUPPORTEDOPERATION_UNSUPPORTEDCHANGEINSTANCEFAMILYTOSA3,
    UNSUPPORTEDOPERATION_UNSUPPORTEDCHANGEINSTANCETOTHISINSTANCEFAMILY,
    UNSUPPORTEDOPERATION_UNSUPPORTEDINTERNATIONALUSER,
    UNSUPPORTEDOPERATION_USERLIMITOPERATIONEXCEEDQUOTA,
    UNSUPPORTEDOPERATION_WINDOWSIMAGEEXPORTUNSUPPORTED,
    VPCADDRNOTINSUBNET,
    VPCIPISUSED,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn unique() {
        let got = ALL.iter().collect::<HashSet<_>>();
        assert_eq!(got.len(), ALL.len());
    }

    #[test]
    fn well_formed() {
        for code in ALL {
            assert!(!code.is_empty());
            assert!(
                code.split('.').all(|part| !part.is_empty()),
                "{code}"
            );
            assert!(!code.contains(char::is_whitespace), "{code}");
        }
    }

    #[test_case(INVALIDPARAMETERVALUE_LIMITEXCEEDED, "InvalidParameterValue.LimitExceeded")]
    #[test_case(INVALIDKEYPAIRID_NOTFOUND, "InvalidKeyPairId.NotFound")]
    #[test_case(INVALIDINSTANCEID_NOTFOUND, "InvalidInstanceId.NotFound")]
    fn known(code: &str, want: &str) {
        assert_eq!(code, want);
        assert!(ALL.contains(&code), "{code}");
    }
}
