// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message keys shared by every catalog.
//!
//! The string values are the wire contract: callers that format messages by
//! key expect exactly these spellings, including historical typos such as
//! `optionNOOPTIMIMIZE`.

// Errors
pub const ER0000: &str = "ER0000";
pub const ER_NO_CURLYBRACE: &str = "ER_NO_CURLYBRACE";
pub const ER_ILLEGAL_ATTRIBUTE: &str = "ER_ILLEGAL_ATTRIBUTE";
pub const ER_NULL_SOURCENODE_APPLYIMPORTS: &str = "ER_NULL_SOURCENODE_APPLYIMPORTS";
pub const ER_CANNOT_ADD: &str = "ER_CANNOT_ADD";
pub const ER_NULL_SOURCENODE_HANDLEAPPLYTEMPLATES: &str = "ER_NULL_SOURCENODE_HANDLEAPPLYTEMPLATES";
pub const ER_NO_NAME_ATTRIB: &str = "ER_NO_NAME_ATTRIB";
pub const ER_TEMPLATE_NOT_FOUND: &str = "ER_TEMPLATE_NOT_FOUND";
pub const ER_CANT_RESOLVE_NAME_AVT: &str = "ER_CANT_RESOLVE_NAME_AVT";
pub const ER_REQUIRES_ATTRIB: &str = "ER_REQUIRES_ATTRIB";
pub const ER_MUST_HAVE_TEST_ATTRIB: &str = "ER_MUST_HAVE_TEST_ATTRIB";
pub const ER_BAD_VAL_ON_LEVEL_ATTRIB: &str = "ER_BAD_VAL_ON_LEVEL_ATTRIB";
pub const ER_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML: &str = "ER_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML";
pub const ER_PROCESSINGINSTRUCTION_NOTVALID_NCNAME: &str = "ER_PROCESSINGINSTRUCTION_NOTVALID_NCNAME";
pub const ER_NEED_MATCH_ATTRIB: &str = "ER_NEED_MATCH_ATTRIB";
pub const ER_NEED_NAME_OR_MATCH_ATTRIB: &str = "ER_NEED_NAME_OR_MATCH_ATTRIB";
pub const ER_CANT_RESOLVE_NSPREFIX: &str = "ER_CANT_RESOLVE_NSPREFIX";
pub const ER_ILLEGAL_VALUE: &str = "ER_ILLEGAL_VALUE";
pub const ER_NO_OWNERDOC: &str = "ER_NO_OWNERDOC";
pub const ER_ELEMTEMPLATEELEM_ERR: &str = "ER_ELEMTEMPLATEELEM_ERR";
pub const ER_NULL_CHILD: &str = "ER_NULL_CHILD";
pub const ER_NEED_SELECT_ATTRIB: &str = "ER_NEED_SELECT_ATTRIB";
pub const ER_NEED_TEST_ATTRIB: &str = "ER_NEED_TEST_ATTRIB";
pub const ER_NEED_NAME_ATTRIB: &str = "ER_NEED_NAME_ATTRIB";
pub const ER_NO_CONTEXT_OWNERDOC: &str = "ER_NO_CONTEXT_OWNERDOC";
pub const ER_COULD_NOT_CREATE_XML_PROC_LIAISON: &str = "ER_COULD_NOT_CREATE_XML_PROC_LIAISON";
pub const ER_PROCESS_NOT_SUCCESSFUL: &str = "ER_PROCESS_NOT_SUCCESSFUL";
pub const ER_NOT_SUCCESSFUL: &str = "ER_NOT_SUCCESSFUL";
pub const ER_ENCODING_NOT_SUPPORTED: &str = "ER_ENCODING_NOT_SUPPORTED";
pub const ER_COULD_NOT_CREATE_TRACELISTENER: &str = "ER_COULD_NOT_CREATE_TRACELISTENER";
pub const ER_KEY_REQUIRES_NAME_ATTRIB: &str = "ER_KEY_REQUIRES_NAME_ATTRIB";
pub const ER_KEY_REQUIRES_MATCH_ATTRIB: &str = "ER_KEY_REQUIRES_MATCH_ATTRIB";
pub const ER_KEY_REQUIRES_USE_ATTRIB: &str = "ER_KEY_REQUIRES_USE_ATTRIB";
pub const ER_REQUIRES_ELEMENTS_ATTRIB: &str = "ER_REQUIRES_ELEMENTS_ATTRIB";
pub const ER_MISSING_PREFIX_ATTRIB: &str = "ER_MISSING_PREFIX_ATTRIB";
pub const ER_BAD_STYLESHEET_URL: &str = "ER_BAD_STYLESHEET_URL";
pub const ER_FILE_NOT_FOUND: &str = "ER_FILE_NOT_FOUND";
pub const ER_IOEXCEPTION: &str = "ER_IOEXCEPTION";
pub const ER_NO_HREF_ATTRIB: &str = "ER_NO_HREF_ATTRIB";
pub const ER_STYLESHEET_INCLUDES_ITSELF: &str = "ER_STYLESHEET_INCLUDES_ITSELF";
pub const ER_PROCESSINCLUDE_ERROR: &str = "ER_PROCESSINCLUDE_ERROR";
pub const ER_MISSING_LANG_ATTRIB: &str = "ER_MISSING_LANG_ATTRIB";
pub const ER_MISSING_CONTAINER_ELEMENT_COMPONENT: &str = "ER_MISSING_CONTAINER_ELEMENT_COMPONENT";
pub const ER_CAN_ONLY_OUTPUT_TO_ELEMENT: &str = "ER_CAN_ONLY_OUTPUT_TO_ELEMENT";
pub const ER_PROCESS_ERROR: &str = "ER_PROCESS_ERROR";
pub const ER_UNIMPLNODE_ERROR: &str = "ER_UNIMPLNODE_ERROR";
pub const ER_NO_SELECT_EXPRESSION: &str = "ER_NO_SELECT_EXPRESSION";
pub const ER_CANNOT_SERIALIZE_XSLPROCESSOR: &str = "ER_CANNOT_SERIALIZE_XSLPROCESSOR";
pub const ER_NO_INPUT_STYLESHEET: &str = "ER_NO_INPUT_STYLESHEET";
pub const ER_FAILED_PROCESS_STYLESHEET: &str = "ER_FAILED_PROCESS_STYLESHEET";
pub const ER_COULDNT_PARSE_DOC: &str = "ER_COULDNT_PARSE_DOC";
pub const ER_COULDNT_FIND_FRAGMENT: &str = "ER_COULDNT_FIND_FRAGMENT";
pub const ER_NODE_NOT_ELEMENT: &str = "ER_NODE_NOT_ELEMENT";
pub const ER_FOREACH_NEED_MATCH_OR_NAME_ATTRIB: &str = "ER_FOREACH_NEED_MATCH_OR_NAME_ATTRIB";
pub const ER_TEMPLATES_NEED_MATCH_OR_NAME_ATTRIB: &str = "ER_TEMPLATES_NEED_MATCH_OR_NAME_ATTRIB";
pub const ER_NO_CLONE_OF_DOCUMENT_FRAG: &str = "ER_NO_CLONE_OF_DOCUMENT_FRAG";
pub const ER_CANT_CREATE_ITEM: &str = "ER_CANT_CREATE_ITEM";
pub const ER_XMLSPACE_ILLEGAL_VALUE: &str = "ER_XMLSPACE_ILLEGAL_VALUE";
pub const ER_NO_XSLKEY_DECLARATION: &str = "ER_NO_XSLKEY_DECLARATION";
pub const ER_CANT_CREATE_URL: &str = "ER_CANT_CREATE_URL";
pub const ER_XSLFUNCTIONS_UNSUPPORTED: &str = "ER_XSLFUNCTIONS_UNSUPPORTED";
pub const ER_PROCESSOR_ERROR: &str = "ER_PROCESSOR_ERROR";
pub const ER_NOT_ALLOWED_INSIDE_STYLESHEET: &str = "ER_NOT_ALLOWED_INSIDE_STYLESHEET";
pub const ER_RESULTNS_NOT_SUPPORTED: &str = "ER_RESULTNS_NOT_SUPPORTED";
pub const ER_DEFAULTSPACE_NOT_SUPPORTED: &str = "ER_DEFAULTSPACE_NOT_SUPPORTED";
pub const ER_INDENTRESULT_NOT_SUPPORTED: &str = "ER_INDENTRESULT_NOT_SUPPORTED";
pub const ER_ILLEGAL_ATTRIB: &str = "ER_ILLEGAL_ATTRIB";
pub const ER_UNKNOWN_XSL_ELEM: &str = "ER_UNKNOWN_XSL_ELEM";
pub const ER_BAD_XSLSORT_USE: &str = "ER_BAD_XSLSORT_USE";
pub const ER_MISPLACED_XSLWHEN: &str = "ER_MISPLACED_XSLWHEN";
pub const ER_XSLWHEN_NOT_PARENTED_BY_XSLCHOOSE: &str = "ER_XSLWHEN_NOT_PARENTED_BY_XSLCHOOSE";
pub const ER_MISPLACED_XSLOTHERWISE: &str = "ER_MISPLACED_XSLOTHERWISE";
pub const ER_XSLOTHERWISE_NOT_PARENTED_BY_XSLCHOOSE: &str = "ER_XSLOTHERWISE_NOT_PARENTED_BY_XSLCHOOSE";
pub const ER_NOT_ALLOWED_INSIDE_TEMPLATE: &str = "ER_NOT_ALLOWED_INSIDE_TEMPLATE";
pub const ER_UNKNOWN_EXT_NS_PREFIX: &str = "ER_UNKNOWN_EXT_NS_PREFIX";
pub const ER_IMPORTS_AS_FIRST_ELEM: &str = "ER_IMPORTS_AS_FIRST_ELEM";
pub const ER_IMPORTING_ITSELF: &str = "ER_IMPORTING_ITSELF";
pub const ER_XMLSPACE_ILLEGAL_VAL: &str = "ER_XMLSPACE_ILLEGAL_VAL";
pub const ER_PROCESSSTYLESHEET_NOT_SUCCESSFUL: &str = "ER_PROCESSSTYLESHEET_NOT_SUCCESSFUL";
pub const ER_SAX_EXCEPTION: &str = "ER_SAX_EXCEPTION";
pub const ER_XSLT_ERROR: &str = "ER_XSLT_ERROR";
pub const ER_CURRENCY_SIGN_ILLEGAL: &str = "ER_CURRENCY_SIGN_ILLEGAL";
pub const ER_DOCUMENT_FUNCTION_INVALID_IN_STYLESHEET_DOM: &str = "ER_DOCUMENT_FUNCTION_INVALID_IN_STYLESHEET_DOM";
pub const ER_CANT_RESOLVE_PREFIX_OF_NON_PREFIX_RESOLVER: &str = "ER_CANT_RESOLVE_PREFIX_OF_NON_PREFIX_RESOLVER";
pub const ER_REDIRECT_COULDNT_GET_FILENAME: &str = "ER_REDIRECT_COULDNT_GET_FILENAME";
pub const ER_CANNOT_BUILD_FORMATTERLISTENER_IN_REDIRECT: &str = "ER_CANNOT_BUILD_FORMATTERLISTENER_IN_REDIRECT";
pub const ER_INVALID_PREFIX_IN_EXCLUDERESULTPREFIX: &str = "ER_INVALID_PREFIX_IN_EXCLUDERESULTPREFIX";
pub const ER_MISSING_NS_URI: &str = "ER_MISSING_NS_URI";
pub const ER_MISSING_ARG_FOR_OPTION: &str = "ER_MISSING_ARG_FOR_OPTION";
pub const ER_INVALID_OPTION: &str = "ER_INVALID_OPTION";
pub const ER_MALFORMED_FORMAT_STRING: &str = "ER_MALFORMED_FORMAT_STRING";
pub const ER_STYLESHEET_REQUIRES_VERSION_ATTRIB: &str = "ER_STYLESHEET_REQUIRES_VERSION_ATTRIB";
pub const ER_ILLEGAL_ATTRIBUTE_VALUE: &str = "ER_ILLEGAL_ATTRIBUTE_VALUE";
pub const ER_CHOOSE_REQUIRES_WHEN: &str = "ER_CHOOSE_REQUIRES_WHEN";
pub const ER_NO_APPLY_IMPORT_IN_FOR_EACH: &str = "ER_NO_APPLY_IMPORT_IN_FOR_EACH";
pub const ER_CANT_USE_DTM_FOR_OUTPUT: &str = "ER_CANT_USE_DTM_FOR_OUTPUT";
pub const ER_CANT_USE_DTM_FOR_INPUT: &str = "ER_CANT_USE_DTM_FOR_INPUT";
pub const ER_CALL_TO_EXT_FAILED: &str = "ER_CALL_TO_EXT_FAILED";
pub const ER_PREFIX_MUST_RESOLVE: &str = "ER_PREFIX_MUST_RESOLVE";
pub const ER_INVALID_UTF16_SURROGATE: &str = "ER_INVALID_UTF16_SURROGATE";
pub const ER_XSLATTRSET_USED_ITSELF: &str = "ER_XSLATTRSET_USED_ITSELF";
pub const ER_CANNOT_MIX_XERCESDOM: &str = "ER_CANNOT_MIX_XERCESDOM";
pub const ER_TOO_MANY_LISTENERS: &str = "ER_TOO_MANY_LISTENERS";
pub const ER_IN_ELEMTEMPLATEELEM_READOBJECT: &str = "ER_IN_ELEMTEMPLATEELEM_READOBJECT";
pub const ER_DUPLICATE_NAMED_TEMPLATE: &str = "ER_DUPLICATE_NAMED_TEMPLATE";
pub const ER_INVALID_KEY_CALL: &str = "ER_INVALID_KEY_CALL";
pub const ER_REFERENCING_ITSELF: &str = "ER_REFERENCING_ITSELF";
pub const ER_ILLEGAL_DOMSOURCE_INPUT: &str = "ER_ILLEGAL_DOMSOURCE_INPUT";
pub const ER_CLASS_NOT_FOUND_FOR_OPTION: &str = "ER_CLASS_NOT_FOUND_FOR_OPTION";
pub const ER_REQUIRED_ELEM_NOT_FOUND: &str = "ER_REQUIRED_ELEM_NOT_FOUND";
pub const ER_INPUT_CANNOT_BE_NULL: &str = "ER_INPUT_CANNOT_BE_NULL";
pub const ER_URI_CANNOT_BE_NULL: &str = "ER_URI_CANNOT_BE_NULL";
pub const ER_FILE_CANNOT_BE_NULL: &str = "ER_FILE_CANNOT_BE_NULL";
pub const ER_SOURCE_CANNOT_BE_NULL: &str = "ER_SOURCE_CANNOT_BE_NULL";
pub const ER_CANNOT_INIT_BSFMGR: &str = "ER_CANNOT_INIT_BSFMGR";
pub const ER_CANNOT_CMPL_EXTENSN: &str = "ER_CANNOT_CMPL_EXTENSN";
pub const ER_CANNOT_CREATE_EXTENSN: &str = "ER_CANNOT_CREATE_EXTENSN";
pub const ER_INSTANCE_MTHD_CALL_REQUIRES: &str = "ER_INSTANCE_MTHD_CALL_REQUIRES";
pub const ER_INVALID_ELEMENT_NAME: &str = "ER_INVALID_ELEMENT_NAME";
pub const ER_ELEMENT_NAME_METHOD_STATIC: &str = "ER_ELEMENT_NAME_METHOD_STATIC";
pub const ER_EXTENSION_FUNC_UNKNOWN: &str = "ER_EXTENSION_FUNC_UNKNOWN";
pub const ER_MORE_MATCH_CONSTRUCTOR: &str = "ER_MORE_MATCH_CONSTRUCTOR";
pub const ER_MORE_MATCH_METHOD: &str = "ER_MORE_MATCH_METHOD";
pub const ER_MORE_MATCH_ELEMENT: &str = "ER_MORE_MATCH_ELEMENT";
pub const ER_INVALID_CONTEXT_PASSED: &str = "ER_INVALID_CONTEXT_PASSED";
pub const ER_POOL_EXISTS: &str = "ER_POOL_EXISTS";
pub const ER_NO_DRIVER_NAME: &str = "ER_NO_DRIVER_NAME";
pub const ER_NO_URL: &str = "ER_NO_URL";
pub const ER_POOL_SIZE_LESSTHAN_ONE: &str = "ER_POOL_SIZE_LESSTHAN_ONE";
pub const ER_INVALID_DRIVER: &str = "ER_INVALID_DRIVER";
pub const ER_NO_STYLESHEETROOT: &str = "ER_NO_STYLESHEETROOT";
pub const ER_ILLEGAL_XMLSPACE_VALUE: &str = "ER_ILLEGAL_XMLSPACE_VALUE";
pub const ER_PROCESSFROMNODE_FAILED: &str = "ER_PROCESSFROMNODE_FAILED";
pub const ER_RESOURCE_COULD_NOT_LOAD: &str = "ER_RESOURCE_COULD_NOT_LOAD";
pub const ER_BUFFER_SIZE_LESSTHAN_ZERO: &str = "ER_BUFFER_SIZE_LESSTHAN_ZERO";
pub const ER_UNKNOWN_ERROR_CALLING_EXTENSION: &str = "ER_UNKNOWN_ERROR_CALLING_EXTENSION";
pub const ER_NO_NAMESPACE_DECL: &str = "ER_NO_NAMESPACE_DECL";
pub const ER_ELEM_CONTENT_NOT_ALLOWED: &str = "ER_ELEM_CONTENT_NOT_ALLOWED";
pub const ER_STYLESHEET_DIRECTED_TERMINATION: &str = "ER_STYLESHEET_DIRECTED_TERMINATION";
pub const ER_ONE_OR_TWO: &str = "ER_ONE_OR_TWO";
pub const ER_TWO_OR_THREE: &str = "ER_TWO_OR_THREE";
pub const ER_COULD_NOT_LOAD_RESOURCE: &str = "ER_COULD_NOT_LOAD_RESOURCE";
pub const ER_CANNOT_INIT_DEFAULT_TEMPLATES: &str = "ER_CANNOT_INIT_DEFAULT_TEMPLATES";
pub const ER_RESULT_NULL: &str = "ER_RESULT_NULL";
pub const ER_RESULT_COULD_NOT_BE_SET: &str = "ER_RESULT_COULD_NOT_BE_SET";
pub const ER_NO_OUTPUT_SPECIFIED: &str = "ER_NO_OUTPUT_SPECIFIED";
pub const ER_CANNOT_TRANSFORM_TO_RESULT_TYPE: &str = "ER_CANNOT_TRANSFORM_TO_RESULT_TYPE";
pub const ER_CANNOT_TRANSFORM_SOURCE_TYPE: &str = "ER_CANNOT_TRANSFORM_SOURCE_TYPE";
pub const ER_NULL_CONTENT_HANDLER: &str = "ER_NULL_CONTENT_HANDLER";
pub const ER_NULL_ERROR_HANDLER: &str = "ER_NULL_ERROR_HANDLER";
pub const ER_CANNOT_CALL_PARSE: &str = "ER_CANNOT_CALL_PARSE";
pub const ER_NO_PARENT_FOR_FILTER: &str = "ER_NO_PARENT_FOR_FILTER";
pub const ER_NO_STYLESHEET_IN_MEDIA: &str = "ER_NO_STYLESHEET_IN_MEDIA";
pub const ER_NO_STYLESHEET_PI: &str = "ER_NO_STYLESHEET_PI";
pub const ER_NOT_SUPPORTED: &str = "ER_NOT_SUPPORTED";
pub const ER_PROPERTY_VALUE_BOOLEAN: &str = "ER_PROPERTY_VALUE_BOOLEAN";
pub const ER_COULD_NOT_FIND_EXTERN_SCRIPT: &str = "ER_COULD_NOT_FIND_EXTERN_SCRIPT";
pub const ER_RESOURCE_COULD_NOT_FIND: &str = "ER_RESOURCE_COULD_NOT_FIND";
pub const ER_OUTPUT_PROPERTY_NOT_RECOGNIZED: &str = "ER_OUTPUT_PROPERTY_NOT_RECOGNIZED";
pub const ER_FAILED_CREATING_ELEMLITRSLT: &str = "ER_FAILED_CREATING_ELEMLITRSLT";
pub const ER_VALUE_SHOULD_BE_NUMBER: &str = "ER_VALUE_SHOULD_BE_NUMBER";
pub const ER_VALUE_SHOULD_EQUAL: &str = "ER_VALUE_SHOULD_EQUAL";
pub const ER_FAILED_CALLING_METHOD: &str = "ER_FAILED_CALLING_METHOD";
pub const ER_FAILED_CREATING_ELEMTMPL: &str = "ER_FAILED_CREATING_ELEMTMPL";
pub const ER_CHARS_NOT_ALLOWED: &str = "ER_CHARS_NOT_ALLOWED";
pub const ER_ATTR_NOT_ALLOWED: &str = "ER_ATTR_NOT_ALLOWED";
pub const ER_BAD_VALUE: &str = "ER_BAD_VALUE";
pub const ER_ATTRIB_VALUE_NOT_FOUND: &str = "ER_ATTRIB_VALUE_NOT_FOUND";
pub const ER_ATTRIB_VALUE_NOT_RECOGNIZED: &str = "ER_ATTRIB_VALUE_NOT_RECOGNIZED";
pub const ER_NULL_URI_NAMESPACE: &str = "ER_NULL_URI_NAMESPACE";
pub const ER_NUMBER_TOO_BIG: &str = "ER_NUMBER_TOO_BIG";
pub const ER_CANNOT_FIND_SAX1_DRIVER: &str = "ER_CANNOT_FIND_SAX1_DRIVER";
pub const ER_SAX1_DRIVER_NOT_LOADED: &str = "ER_SAX1_DRIVER_NOT_LOADED";
pub const ER_SAX1_DRIVER_NOT_INSTANTIATED: &str = "ER_SAX1_DRIVER_NOT_INSTANTIATED";
pub const ER_SAX1_DRIVER_NOT_IMPLEMENT_PARSER: &str = "ER_SAX1_DRIVER_NOT_IMPLEMENT_PARSER";
pub const ER_PARSER_PROPERTY_NOT_SPECIFIED: &str = "ER_PARSER_PROPERTY_NOT_SPECIFIED";
pub const ER_PARSER_ARG_CANNOT_BE_NULL: &str = "ER_PARSER_ARG_CANNOT_BE_NULL";
pub const ER_FEATURE: &str = "ER_FEATURE";
pub const ER_PROPERTY: &str = "ER_PROPERTY";
pub const ER_NULL_ENTITY_RESOLVER: &str = "ER_NULL_ENTITY_RESOLVER";
pub const ER_NULL_DTD_HANDLER: &str = "ER_NULL_DTD_HANDLER";
pub const ER_NO_DRIVER_NAME_SPECIFIED: &str = "ER_NO_DRIVER_NAME_SPECIFIED";
pub const ER_NO_URL_SPECIFIED: &str = "ER_NO_URL_SPECIFIED";
pub const ER_POOLSIZE_LESS_THAN_ONE: &str = "ER_POOLSIZE_LESS_THAN_ONE";
pub const ER_INVALID_DRIVER_NAME: &str = "ER_INVALID_DRIVER_NAME";
pub const ER_ERRORLISTENER: &str = "ER_ERRORLISTENER";
pub const ER_ASSERT_NO_TEMPLATE_PARENT: &str = "ER_ASSERT_NO_TEMPLATE_PARENT";
pub const ER_ASSERT_REDUNDENT_EXPR_ELIMINATOR: &str = "ER_ASSERT_REDUNDENT_EXPR_ELIMINATOR";
pub const ER_NOT_ALLOWED_IN_POSITION: &str = "ER_NOT_ALLOWED_IN_POSITION";
pub const ER_NONWHITESPACE_NOT_ALLOWED_IN_POSITION: &str = "ER_NONWHITESPACE_NOT_ALLOWED_IN_POSITION";
pub const INVALID_TCHAR: &str = "INVALID_TCHAR";
pub const INVALID_QNAME: &str = "INVALID_QNAME";
pub const INVALID_ENUM: &str = "INVALID_ENUM";
pub const INVALID_NMTOKEN: &str = "INVALID_NMTOKEN";
pub const INVALID_NCNAME: &str = "INVALID_NCNAME";
pub const INVALID_BOOLEAN: &str = "INVALID_BOOLEAN";
pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
pub const ER_ARG_LITERAL: &str = "ER_ARG_LITERAL";
pub const ER_DUPLICATE_GLOBAL_VAR: &str = "ER_DUPLICATE_GLOBAL_VAR";
pub const ER_DUPLICATE_VAR: &str = "ER_DUPLICATE_VAR";
pub const ER_TEMPLATE_NAME_MATCH: &str = "ER_TEMPLATE_NAME_MATCH";
pub const ER_INVALID_PREFIX: &str = "ER_INVALID_PREFIX";
pub const ER_NO_ATTRIB_SET: &str = "ER_NO_ATTRIB_SET";

// Warnings
pub const WG_FOUND_CURLYBRACE: &str = "WG_FOUND_CURLYBRACE";
pub const WG_COUNT_ATTRIB_MATCHES_NO_ANCESTOR: &str = "WG_COUNT_ATTRIB_MATCHES_NO_ANCESTOR";
pub const WG_EXPR_ATTRIB_CHANGED_TO_SELECT: &str = "WG_EXPR_ATTRIB_CHANGED_TO_SELECT";
pub const WG_NO_LOCALE_IN_FORMATNUMBER: &str = "WG_NO_LOCALE_IN_FORMATNUMBER";
pub const WG_LOCALE_NOT_FOUND: &str = "WG_LOCALE_NOT_FOUND";
pub const WG_CANNOT_MAKE_URL_FROM: &str = "WG_CANNOT_MAKE_URL_FROM";
pub const WG_CANNOT_LOAD_REQUESTED_DOC: &str = "WG_CANNOT_LOAD_REQUESTED_DOC";
pub const WG_CANNOT_FIND_COLLATOR: &str = "WG_CANNOT_FIND_COLLATOR";
pub const WG_FUNCTIONS_SHOULD_USE_URL: &str = "WG_FUNCTIONS_SHOULD_USE_URL";
pub const WG_ENCODING_NOT_SUPPORTED_USING_UTF8: &str = "WG_ENCODING_NOT_SUPPORTED_USING_UTF8";
pub const WG_ENCODING_NOT_SUPPORTED_USING_JAVA: &str = "WG_ENCODING_NOT_SUPPORTED_USING_JAVA";
pub const WG_SPECIFICITY_CONFLICTS: &str = "WG_SPECIFICITY_CONFLICTS";
pub const WG_PARSING_AND_PREPARING: &str = "WG_PARSING_AND_PREPARING";
pub const WG_ATTR_TEMPLATE: &str = "WG_ATTR_TEMPLATE";
pub const WG_CONFLICT_BETWEEN_XSLSTRIPSPACE_AND_XSLPRESERVESP: &str = "WG_CONFLICT_BETWEEN_XSLSTRIPSPACE_AND_XSLPRESERVESP";
pub const WG_ATTRIB_NOT_HANDLED: &str = "WG_ATTRIB_NOT_HANDLED";
pub const WG_NO_DECIMALFORMAT_DECLARATION: &str = "WG_NO_DECIMALFORMAT_DECLARATION";
pub const WG_OLD_XSLT_NS: &str = "WG_OLD_XSLT_NS";
pub const WG_ONE_DEFAULT_XSLDECIMALFORMAT_ALLOWED: &str = "WG_ONE_DEFAULT_XSLDECIMALFORMAT_ALLOWED";
pub const WG_XSLDECIMALFORMAT_NAMES_MUST_BE_UNIQUE: &str = "WG_XSLDECIMALFORMAT_NAMES_MUST_BE_UNIQUE";
pub const WG_ILLEGAL_ATTRIBUTE: &str = "WG_ILLEGAL_ATTRIBUTE";
pub const WG_COULD_NOT_RESOLVE_PREFIX: &str = "WG_COULD_NOT_RESOLVE_PREFIX";
pub const WG_STYLESHEET_REQUIRES_VERSION_ATTRIB: &str = "WG_STYLESHEET_REQUIRES_VERSION_ATTRIB";
pub const WG_ILLEGAL_ATTRIBUTE_NAME: &str = "WG_ILLEGAL_ATTRIBUTE_NAME";
pub const WG_ILLEGAL_ATTRIBUTE_VALUE: &str = "WG_ILLEGAL_ATTRIBUTE_VALUE";
pub const WG_EMPTY_SECOND_ARG: &str = "WG_EMPTY_SECOND_ARG";
pub const WG_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML: &str = "WG_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML";
pub const WG_PROCESSINGINSTRUCTION_NOTVALID_NCNAME: &str = "WG_PROCESSINGINSTRUCTION_NOTVALID_NCNAME";
pub const WG_ILLEGAL_ATTRIBUTE_POSITION: &str = "WG_ILLEGAL_ATTRIBUTE_POSITION";

// Miscellaneous
pub const UI_LANGUAGE: &str = "ui_language";
pub const HELP_LANGUAGE: &str = "help_language";
pub const LANGUAGE: &str = "language";
pub const BAD_CODE: &str = "BAD_CODE";
pub const FORMAT_FAILED: &str = "FORMAT_FAILED";
pub const VERSION: &str = "version";
pub const VERSION2: &str = "version2";
pub const YES: &str = "yes";
pub const LINE: &str = "line";
pub const COLUMN: &str = "column";
pub const XSLDONE: &str = "xsldone";

// Process usage
pub const XSL_PROC_OPTION: &str = "xslProc_option";
pub const XSL_PROC_INVALID_XSLTC_OPTION: &str = "xslProc_invalid_xsltc_option";
pub const XSL_PROC_INVALID_XALAN_OPTION: &str = "xslProc_invalid_xalan_option";
pub const XSL_PROC_NO_INPUT: &str = "xslProc_no_input";
pub const XSL_PROC_COMMON_OPTIONS: &str = "xslProc_common_options";
pub const XSL_PROC_XALAN_OPTIONS: &str = "xslProc_xalan_options";
pub const XSL_PROC_XSLTC_OPTIONS: &str = "xslProc_xsltc_options";
pub const XSL_PROC_RETURN_TO_CONTINUE: &str = "xslProc_return_to_continue";
pub const OPTION_XSLTC: &str = "optionXSLTC";
pub const OPTION_IN: &str = "optionIN";
pub const OPTION_XSL: &str = "optionXSL";
pub const OPTION_OUT: &str = "optionOUT";
pub const OPTION_LXCIN: &str = "optionLXCIN";
pub const OPTION_LXCOUT: &str = "optionLXCOUT";
pub const OPTION_PARSER: &str = "optionPARSER";
pub const OPTION_E: &str = "optionE";
pub const OPTION_V: &str = "optionV";
pub const OPTION_QC: &str = "optionQC";
pub const OPTION_Q: &str = "optionQ";
pub const OPTION_LF: &str = "optionLF";
pub const OPTION_CR: &str = "optionCR";
pub const OPTION_ESCAPE: &str = "optionESCAPE";
pub const OPTION_INDENT: &str = "optionINDENT";
pub const OPTION_TT: &str = "optionTT";
pub const OPTION_TG: &str = "optionTG";
pub const OPTION_TS: &str = "optionTS";
pub const OPTION_TTC: &str = "optionTTC";
pub const OPTION_TCLASS: &str = "optionTCLASS";
pub const OPTION_VALIDATE: &str = "optionVALIDATE";
pub const OPTION_EDUMP: &str = "optionEDUMP";
pub const OPTION_XML: &str = "optionXML";
pub const OPTION_TEXT: &str = "optionTEXT";
pub const OPTION_HTML: &str = "optionHTML";
pub const OPTION_PARAM: &str = "optionPARAM";
pub const NO_PARSERMSG1: &str = "noParsermsg1";
pub const NO_PARSERMSG2: &str = "noParsermsg2";
pub const NO_PARSERMSG3: &str = "noParsermsg3";
pub const NO_PARSERMSG4: &str = "noParsermsg4";
pub const NO_PARSERMSG5: &str = "noParsermsg5";
pub const OPTION_URIRESOLVER: &str = "optionURIRESOLVER";
pub const OPTION_ENTITYRESOLVER: &str = "optionENTITYRESOLVER";
pub const OPTION_CONTENTHANDLER: &str = "optionCONTENTHANDLER";
pub const OPTION_LINENUMBERS: &str = "optionLINENUMBERS";
pub const OPTION_MEDIA: &str = "optionMEDIA";
pub const OPTION_FLAVOR: &str = "optionFLAVOR";
pub const OPTION_DIAG: &str = "optionDIAG";
pub const OPTION_INCREMENTAL: &str = "optionINCREMENTAL";
pub const OPTION_NOOPTIMIMIZE: &str = "optionNOOPTIMIMIZE";
pub const OPTION_RL: &str = "optionRL";
pub const OPTION_XO: &str = "optionXO";
pub const OPTION_XD: &str = "optionXD";
pub const OPTION_XJ: &str = "optionXJ";
pub const OPTION_XP: &str = "optionXP";
pub const OPTION_XN: &str = "optionXN";
pub const OPTION_XX: &str = "optionXX";
pub const OPTION_XT: &str = "optionXT";

// Miscellaneous
pub const DIAG_TIMING: &str = "diagTiming";
pub const RECURSION_TOO_DEEP: &str = "recursionTooDeep";
pub const NAME_IS: &str = "nameIs";
pub const MATCH_PATTERN_IS: &str = "matchPatternIs";

/// Every key, in catalog order.
pub const ALL: &[&str] = &[
    ER0000,
    ER_NO_CURLYBRACE,
    ER_ILLEGAL_ATTRIBUTE,
    ER_NULL_SOURCENODE_APPLYIMPORTS,
    ER_CANNOT_ADD,
    ER_NULL_SOURCENODE_HANDLEAPPLYTEMPLATES,
    ER_NO_NAME_ATTRIB,
    ER_TEMPLATE_NOT_FOUND,
    ER_CANT_RESOLVE_NAME_AVT,
    ER_REQUIRES_ATTRIB,
    ER_MUST_HAVE_TEST_ATTRIB,
    ER_BAD_VAL_ON_LEVEL_ATTRIB,
    ER_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML,
    ER_PROCESSINGINSTRUCTION_NOTVALID_NCNAME,
    ER_NEED_MATCH_ATTRIB,
    ER_NEED_NAME_OR_MATCH_ATTRIB,
    ER_CANT_RESOLVE_NSPREFIX,
    ER_ILLEGAL_VALUE,
    ER_NO_OWNERDOC,
    ER_ELEMTEMPLATEELEM_ERR,
    ER_NULL_CHILD,
    ER_NEED_SELECT_ATTRIB,
    ER_NEED_TEST_ATTRIB,
    ER_NEED_NAME_ATTRIB,
    ER_NO_CONTEXT_OWNERDOC,
    ER_COULD_NOT_CREATE_XML_PROC_LIAISON,
    ER_PROCESS_NOT_SUCCESSFUL,
    ER_NOT_SUCCESSFUL,
    ER_ENCODING_NOT_SUPPORTED,
    ER_COULD_NOT_CREATE_TRACELISTENER,
    ER_KEY_REQUIRES_NAME_ATTRIB,
    ER_KEY_REQUIRES_MATCH_ATTRIB,
    ER_KEY_REQUIRES_USE_ATTRIB,
    ER_REQUIRES_ELEMENTS_ATTRIB,
    ER_MISSING_PREFIX_ATTRIB,
    ER_BAD_STYLESHEET_URL,
    ER_FILE_NOT_FOUND,
    ER_IOEXCEPTION,
    ER_NO_HREF_ATTRIB,
    ER_STYLESHEET_INCLUDES_ITSELF,
    ER_PROCESSINCLUDE_ERROR,
    ER_MISSING_LANG_ATTRIB,
    ER_MISSING_CONTAINER_ELEMENT_COMPONENT,
    ER_CAN_ONLY_OUTPUT_TO_ELEMENT,
    ER_PROCESS_ERROR,
    ER_UNIMPLNODE_ERROR,
    ER_NO_SELECT_EXPRESSION,
    ER_CANNOT_SERIALIZE_XSLPROCESSOR,
    ER_NO_INPUT_STYLESHEET,
    ER_FAILED_PROCESS_STYLESHEET,
    ER_COULDNT_PARSE_DOC,
    ER_COULDNT_FIND_FRAGMENT,
    ER_NODE_NOT_ELEMENT,
    ER_FOREACH_NEED_MATCH_OR_NAME_ATTRIB,
    ER_TEMPLATES_NEED_MATCH_OR_NAME_ATTRIB,
    ER_NO_CLONE_OF_DOCUMENT_FRAG,
    ER_CANT_CREATE_ITEM,
    ER_XMLSPACE_ILLEGAL_VALUE,
    ER_NO_XSLKEY_DECLARATION,
    ER_CANT_CREATE_URL,
    ER_XSLFUNCTIONS_UNSUPPORTED,
    ER_PROCESSOR_ERROR,
    ER_NOT_ALLOWED_INSIDE_STYLESHEET,
    ER_RESULTNS_NOT_SUPPORTED,
    ER_DEFAULTSPACE_NOT_SUPPORTED,
    ER_INDENTRESULT_NOT_SUPPORTED,
    ER_ILLEGAL_ATTRIB,
    ER_UNKNOWN_XSL_ELEM,
    ER_BAD_XSLSORT_USE,
    ER_MISPLACED_XSLWHEN,
    ER_XSLWHEN_NOT_PARENTED_BY_XSLCHOOSE,
    ER_MISPLACED_XSLOTHERWISE,
    ER_XSLOTHERWISE_NOT_PARENTED_BY_XSLCHOOSE,
    ER_NOT_ALLOWED_INSIDE_TEMPLATE,
    ER_UNKNOWN_EXT_NS_PREFIX,
    ER_IMPORTS_AS_FIRST_ELEM,
    ER_IMPORTING_ITSELF,
    ER_XMLSPACE_ILLEGAL_VAL,
    ER_PROCESSSTYLESHEET_NOT_SUCCESSFUL,
    ER_SAX_EXCEPTION,
    ER_XSLT_ERROR,
    ER_CURRENCY_SIGN_ILLEGAL,
    ER_DOCUMENT_FUNCTION_INVALID_IN_STYLESHEET_DOM,
    ER_CANT_RESOLVE_PREFIX_OF_NON_PREFIX_RESOLVER,
    ER_REDIRECT_COULDNT_GET_FILENAME,
    ER_CANNOT_BUILD_FORMATTERLISTENER_IN_REDIRECT,
    ER_INVALID_PREFIX_IN_EXCLUDERESULTPREFIX,
    ER_MISSING_NS_URI,
    ER_MISSING_ARG_FOR_OPTION,
    ER_INVALID_OPTION,
    ER_MALFORMED_FORMAT_STRING,
    ER_STYLESHEET_REQUIRES_VERSION_ATTRIB,
    ER_ILLEGAL_ATTRIBUTE_VALUE,
    ER_CHOOSE_REQUIRES_WHEN,
    ER_NO_APPLY_IMPORT_IN_FOR_EACH,
    ER_CANT_USE_DTM_FOR_OUTPUT,
    ER_CANT_USE_DTM_FOR_INPUT,
    ER_CALL_TO_EXT_FAILED,
    ER_PREFIX_MUST_RESOLVE,
    ER_INVALID_UTF16_SURROGATE,
    ER_XSLATTRSET_USED_ITSELF,
    ER_CANNOT_MIX_XERCESDOM,
    ER_TOO_MANY_LISTENERS,
    ER_IN_ELEMTEMPLATEELEM_READOBJECT,
    ER_DUPLICATE_NAMED_TEMPLATE,
    ER_INVALID_KEY_CALL,
    ER_REFERENCING_ITSELF,
    ER_ILLEGAL_DOMSOURCE_INPUT,
    ER_CLASS_NOT_FOUND_FOR_OPTION,
    ER_REQUIRED_ELEM_NOT_FOUND,
    ER_INPUT_CANNOT_BE_NULL,
    ER_URI_CANNOT_BE_NULL,
    ER_FILE_CANNOT_BE_NULL,
    ER_SOURCE_CANNOT_BE_NULL,
    ER_CANNOT_INIT_BSFMGR,
    ER_CANNOT_CMPL_EXTENSN,
    ER_CANNOT_CREATE_EXTENSN,
    ER_INSTANCE_MTHD_CALL_REQUIRES,
    ER_INVALID_ELEMENT_NAME,
    ER_ELEMENT_NAME_METHOD_STATIC,
    ER_EXTENSION_FUNC_UNKNOWN,
    ER_MORE_MATCH_CONSTRUCTOR,
    ER_MORE_MATCH_METHOD,
    ER_MORE_MATCH_ELEMENT,
    ER_INVALID_CONTEXT_PASSED,
    ER_POOL_EXISTS,
    ER_NO_DRIVER_NAME,
    ER_NO_URL,
    ER_POOL_SIZE_LESSTHAN_ONE,
    ER_INVALID_DRIVER,
    ER_NO_STYLESHEETROOT,
    ER_ILLEGAL_XMLSPACE_VALUE,
    ER_PROCESSFROMNODE_FAILED,
    ER_RESOURCE_COULD_NOT_LOAD,
    ER_BUFFER_SIZE_LESSTHAN_ZERO,
    ER_UNKNOWN_ERROR_CALLING_EXTENSION,
    ER_NO_NAMESPACE_DECL,
    ER_ELEM_CONTENT_NOT_ALLOWED,
    ER_STYLESHEET_DIRECTED_TERMINATION,
    ER_ONE_OR_TWO,
    ER_TWO_OR_THREE,
    ER_COULD_NOT_LOAD_RESOURCE,
    ER_CANNOT_INIT_DEFAULT_TEMPLATES,
    ER_RESULT_NULL,
    ER_RESULT_COULD_NOT_BE_SET,
    ER_NO_OUTPUT_SPECIFIED,
    ER_CANNOT_TRANSFORM_TO_RESULT_TYPE,
    ER_CANNOT_TRANSFORM_SOURCE_TYPE,
    ER_NULL_CONTENT_HANDLER,
    ER_NULL_ERROR_HANDLER,
    ER_CANNOT_CALL_PARSE,
    ER_NO_PARENT_FOR_FILTER,
    ER_NO_STYLESHEET_IN_MEDIA,
    ER_NO_STYLESHEET_PI,
    ER_NOT_SUPPORTED,
    ER_PROPERTY_VALUE_BOOLEAN,
    ER_COULD_NOT_FIND_EXTERN_SCRIPT,
    ER_RESOURCE_COULD_NOT_FIND,
    ER_OUTPUT_PROPERTY_NOT_RECOGNIZED,
    ER_FAILED_CREATING_ELEMLITRSLT,
    ER_VALUE_SHOULD_BE_NUMBER,
    ER_VALUE_SHOULD_EQUAL,
    ER_FAILED_CALLING_METHOD,
    ER_FAILED_CREATING_ELEMTMPL,
    ER_CHARS_NOT_ALLOWED,
    ER_ATTR_NOT_ALLOWED,
    ER_BAD_VALUE,
    ER_ATTRIB_VALUE_NOT_FOUND,
    ER_ATTRIB_VALUE_NOT_RECOGNIZED,
    ER_NULL_URI_NAMESPACE,
    ER_NUMBER_TOO_BIG,
    ER_CANNOT_FIND_SAX1_DRIVER,
    ER_SAX1_DRIVER_NOT_LOADED,
    ER_SAX1_DRIVER_NOT_INSTANTIATED,
    ER_SAX1_DRIVER_NOT_IMPLEMENT_PARSER,
    ER_PARSER_PROPERTY_NOT_SPECIFIED,
    ER_PARSER_ARG_CANNOT_BE_NULL,
    ER_FEATURE,
    ER_PROPERTY,
    ER_NULL_ENTITY_RESOLVER,
    ER_NULL_DTD_HANDLER,
    ER_NO_DRIVER_NAME_SPECIFIED,
    ER_NO_URL_SPECIFIED,
    ER_POOLSIZE_LESS_THAN_ONE,
    ER_INVALID_DRIVER_NAME,
    ER_ERRORLISTENER,
    ER_ASSERT_NO_TEMPLATE_PARENT,
    ER_ASSERT_REDUNDENT_EXPR_ELIMINATOR,
    ER_NOT_ALLOWED_IN_POSITION,
    ER_NONWHITESPACE_NOT_ALLOWED_IN_POSITION,
    INVALID_TCHAR,
    INVALID_QNAME,
    INVALID_ENUM,
    INVALID_NMTOKEN,
    INVALID_NCNAME,
    INVALID_BOOLEAN,
    INVALID_NUMBER,
    ER_ARG_LITERAL,
    ER_DUPLICATE_GLOBAL_VAR,
    ER_DUPLICATE_VAR,
    ER_TEMPLATE_NAME_MATCH,
    ER_INVALID_PREFIX,
    ER_NO_ATTRIB_SET,
    WG_FOUND_CURLYBRACE,
    WG_COUNT_ATTRIB_MATCHES_NO_ANCESTOR,
    WG_EXPR_ATTRIB_CHANGED_TO_SELECT,
    WG_NO_LOCALE_IN_FORMATNUMBER,
    WG_LOCALE_NOT_FOUND,
    WG_CANNOT_MAKE_URL_FROM,
    WG_CANNOT_LOAD_REQUESTED_DOC,
    WG_CANNOT_FIND_COLLATOR,
    WG_FUNCTIONS_SHOULD_USE_URL,
    WG_ENCODING_NOT_SUPPORTED_USING_UTF8,
    WG_ENCODING_NOT_SUPPORTED_USING_JAVA,
    WG_SPECIFICITY_CONFLICTS,
    WG_PARSING_AND_PREPARING,
    WG_ATTR_TEMPLATE,
    WG_CONFLICT_BETWEEN_XSLSTRIPSPACE_AND_XSLPRESERVESP,
    WG_ATTRIB_NOT_HANDLED,
    WG_NO_DECIMALFORMAT_DECLARATION,
    WG_OLD_XSLT_NS,
    WG_ONE_DEFAULT_XSLDECIMALFORMAT_ALLOWED,
    WG_XSLDECIMALFORMAT_NAMES_MUST_BE_UNIQUE,
    WG_ILLEGAL_ATTRIBUTE,
    WG_COULD_NOT_RESOLVE_PREFIX,
    WG_STYLESHEET_REQUIRES_VERSION_ATTRIB,
    WG_ILLEGAL_ATTRIBUTE_NAME,
    WG_ILLEGAL_ATTRIBUTE_VALUE,
    WG_EMPTY_SECOND_ARG,
    WG_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML,
    WG_PROCESSINGINSTRUCTION_NOTVALID_NCNAME,
    WG_ILLEGAL_ATTRIBUTE_POSITION,
    UI_LANGUAGE,
    HELP_LANGUAGE,
    LANGUAGE,
    BAD_CODE,
    FORMAT_FAILED,
    VERSION,
    VERSION2,
    YES,
    LINE,
    COLUMN,
    XSLDONE,
    XSL_PROC_OPTION,
    XSL_PROC_INVALID_XSLTC_OPTION,
    XSL_PROC_INVALID_XALAN_OPTION,
    XSL_PROC_NO_INPUT,
    XSL_PROC_COMMON_OPTIONS,
    XSL_PROC_XALAN_OPTIONS,
    XSL_PROC_XSLTC_OPTIONS,
    XSL_PROC_RETURN_TO_CONTINUE,
    OPTION_XSLTC,
    OPTION_IN,
    OPTION_XSL,
    OPTION_OUT,
    OPTION_LXCIN,
    OPTION_LXCOUT,
    OPTION_PARSER,
    OPTION_E,
    OPTION_V,
    OPTION_QC,
    OPTION_Q,
    OPTION_LF,
    OPTION_CR,
    OPTION_ESCAPE,
    OPTION_INDENT,
    OPTION_TT,
    OPTION_TG,
    OPTION_TS,
    OPTION_TTC,
    OPTION_TCLASS,
    OPTION_VALIDATE,
    OPTION_EDUMP,
    OPTION_XML,
    OPTION_TEXT,
    OPTION_HTML,
    OPTION_PARAM,
    NO_PARSERMSG1,
    NO_PARSERMSG2,
    NO_PARSERMSG3,
    NO_PARSERMSG4,
    NO_PARSERMSG5,
    OPTION_URIRESOLVER,
    OPTION_ENTITYRESOLVER,
    OPTION_CONTENTHANDLER,
    OPTION_LINENUMBERS,
    OPTION_MEDIA,
    OPTION_FLAVOR,
    OPTION_DIAG,
    OPTION_INCREMENTAL,
    OPTION_NOOPTIMIMIZE,
    OPTION_RL,
    OPTION_XO,
    OPTION_XD,
    OPTION_XJ,
    OPTION_XP,
    OPTION_XN,
    OPTION_XX,
    OPTION_XT,
    DIAG_TIMING,
    RECURSION_TOO_DEEP,
    NAME_IS,
    MATCH_PATTERN_IS,
];
